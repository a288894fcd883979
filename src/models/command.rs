use crate::models::moves::Move;

/// A recognized line typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Stats,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Case-insensitive and trimmed. `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Command> {
        if let Some(m) = Move::from_token(token) {
            return Some(Command::Play(m));
        }
        match token.trim().to_lowercase().as_str() {
            "quit" | "exit" | "q" => Some(Command::Quit),
            "stats" | "statistics" => Some(Command::Stats),
            "reset" => Some(Command::Reset),
            "help" | "h" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Answer to a yes/no prompt.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn is_negative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}
