use std::fmt;

use crate::models::constants::NUM_MOVES;

/// One of the three throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; NUM_MOVES] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Move::Rock => "🪨",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }

    /// The single move this one beats.
    /// Rock -> Scissors -> Paper -> Rock.
    pub fn defeats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Normalizes a player token (case-insensitive, trimmed) to a move.
    pub fn from_token(token: &str) -> Option<Move> {
        match token.trim().to_lowercase().as_str() {
            "rock" | "r" => Some(Move::Rock),
            "paper" | "p" => Some(Move::Paper),
            "scissors" | "scissor" | "s" => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "YOU WIN!",
            Outcome::Lose => "COMPUTER WINS!",
            Outcome::Tie => "IT'S A TIE!",
        }
    }
}

/// Decides a round. Pure.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.defeats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
