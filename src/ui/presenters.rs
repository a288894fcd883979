use crate::game_engine::Round;
use crate::io::OutputWriter;
use crate::models::moves::{Move, Outcome};
use crate::models::statistics::Statistics;

pub struct WelcomePresenter;

impl WelcomePresenter {
    pub fn show_welcome(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("==========================================");
        output.writeln("   🎮  ROCK - PAPER - SCISSORS  🎮");
        output.writeln("==========================================");
        output.writeln("");
        output.writeln("RULES:");
        for m in Move::ALL.iter() {
            output.writeln(&format!("   {} beats {}", m, m.defeats()));
        }
        output.writeln("");
        Self::show_commands(output);
    }

    pub fn show_commands(output: &mut dyn OutputWriter) {
        output.writeln("COMMANDS:");
        output.writeln("   rock (r) | paper (p) | scissors (s)   play a round");
        output.writeln("   stats                                 show statistics");
        output.writeln("   reset                                 clear statistics");
        output.writeln("   help (h)                              show this text");
        output.writeln("   quit (q, exit)                        leave the game");
        output.writeln("");
    }

    pub fn show_invalid_choice(token: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "❌ '{}' is not a valid choice. Type 'help' for the list of commands.",
            token.trim()
        ));
    }

    pub fn show_farewell(output: &mut dyn OutputWriter) {
        output.writeln("👋 Thanks for playing! Goodbye.");
    }
}

pub struct RoundPresenter;

impl RoundPresenter {
    pub fn show_round(round: &Round, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("You chose:      {}", round.player));
        output.writeln(&format!("Computer chose: {}", round.computer));
        let detail = match round.outcome {
            Outcome::Win => format!("{} beats {}", round.player.name(), round.computer.name()),
            Outcome::Lose => format!("{} beats {}", round.computer.name(), round.player.name()),
            Outcome::Tie => "Great minds think alike".to_string(),
        };
        let marker = match round.outcome {
            Outcome::Win => "🎉",
            Outcome::Lose => "💻",
            Outcome::Tie => "🤝",
        };
        output.writeln(&format!("{} {} ({})", marker, round.outcome.label(), detail));
        output.writeln("");
    }
}

pub struct StatsPresenter;

impl StatsPresenter {
    pub fn show_statistics(stats: &Statistics, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("📊 STATISTICS");
        output.writeln("------------------------------");
        if stats.total_games() == 0 {
            output.writeln("No games played yet.");
            output.writeln("------------------------------");
            output.writeln("");
            return;
        }
        output.writeln(&format!("{:<16}{}", "Your wins:", stats.player_wins()));
        output.writeln(&format!("{:<16}{}", "Computer wins:", stats.computer_wins()));
        output.writeln(&format!("{:<16}{}", "Ties:", stats.ties()));
        output.writeln(&format!("{:<16}{}", "Total games:", stats.total_games()));
        output.writeln(&format!("{:<16}{:.1}%", "Win rate:", stats.win_rate()));
        output.writeln("------------------------------");
        output.writeln("");
    }

    pub fn show_final(stats: &Statistics, session_rounds: u32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("You played {} round(s) this session.", session_rounds));
        Self::show_statistics(stats, output);
    }

    pub fn show_reset_done(output: &mut dyn OutputWriter) {
        output.writeln("🔄 Statistics have been reset.");
    }

    pub fn show_reset_cancelled(output: &mut dyn OutputWriter) {
        output.writeln("Reset cancelled.");
    }

    pub fn show_load_warning(reason: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "⚠️  Could not read saved statistics ({}). Starting fresh.",
            reason
        ));
    }

    pub fn show_save_warning(reason: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!("⚠️  Could not save statistics: {}", reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;

    #[test]
    fn welcome_lists_every_rule() {
        let mut output = MockOutput::new();
        WelcomePresenter::show_welcome(&mut output);
        let text = output.text();
        assert!(text.contains("Rock beats ✂️ Scissors"), "{}", text);
        assert!(text.contains("Scissors beats 📄 Paper"), "{}", text);
        assert!(text.contains("Paper beats 🪨 Rock"), "{}", text);
        assert!(text.contains("quit"));
    }

    #[test]
    fn round_shows_both_moves_and_outcome() {
        let mut output = MockOutput::new();
        let round = Round {
            player: Move::Paper,
            computer: Move::Scissors,
            outcome: Outcome::Lose,
        };
        RoundPresenter::show_round(&round, &mut output);
        let text = output.text();
        assert!(text.contains("Paper"));
        assert!(text.contains("COMPUTER WINS!"));
        assert!(text.contains("Scissors beats Paper"));
    }

    #[test]
    fn empty_statistics_say_so() {
        let mut output = MockOutput::new();
        StatsPresenter::show_statistics(&Statistics::new(), &mut output);
        assert!(output.text().contains("No games played yet."));
    }

    #[test]
    fn statistics_show_one_decimal_win_rate() {
        let mut output = MockOutput::new();
        let stats = Statistics::from_counts(1, 1, 1, 3).unwrap();
        StatsPresenter::show_statistics(&stats, &mut output);
        assert!(output.text().contains("33.3%"), "{}", output.text());
    }
}
