//! Cumulative win/loss/tie counters
//!
//! `player_wins + computer_wins + ties == total_games` holds after every
//! mutation; the only mutators are [`Statistics::record`] and
//! [`Statistics::reset`].

use serde::{Deserialize, Serialize};

use crate::models::errors::{GameError, GameResult};
use crate::models::moves::Outcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    player_wins: u32,
    computer_wins: u32,
    ties: u32,
    total_games: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a statistics value from raw counters, rejecting any that
    /// break the counter invariant.
    pub fn from_counts(
        player_wins: u32,
        computer_wins: u32,
        ties: u32,
        total_games: u32,
    ) -> GameResult<Self> {
        let sum = player_wins as u64 + computer_wins as u64 + ties as u64;
        if sum != total_games as u64 {
            return Err(GameError::Inconsistent {
                player_wins,
                computer_wins,
                ties,
                total_games,
            });
        }
        Ok(Self {
            player_wins,
            computer_wins,
            ties,
            total_games,
        })
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    /// Bumps exactly one outcome counter along with the total.
    ///
    /// Once `total_games` reaches `u32::MAX` further rounds are not
    /// counted.
    pub fn record(&mut self, outcome: Outcome) {
        let Some(total) = self.total_games.checked_add(1) else {
            log::warn!("statistics are full at {} games, round not counted", self.total_games);
            return;
        };
        self.total_games = total;
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Lose => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of games won by the player, 0.0 before any game.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.player_wins as f64 / self.total_games as f64 * 100.0
    }
}

/// On-disk shape of [`Statistics`]. Field order is the key order in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRecord {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub total_games: u32,
    #[serde(default)]
    pub win_rate: f64,
}

impl From<&Statistics> for StatsRecord {
    fn from(stats: &Statistics) -> Self {
        Self {
            player_wins: stats.player_wins,
            computer_wins: stats.computer_wins,
            ties: stats.ties,
            total_games: stats.total_games,
            win_rate: (stats.win_rate() * 100.0).round() / 100.0,
        }
    }
}

impl TryFrom<StatsRecord> for Statistics {
    type Error = GameError;

    // win_rate is derived, so the stored value is ignored.
    fn try_from(record: StatsRecord) -> GameResult<Self> {
        Statistics::from_counts(
            record.player_wins,
            record.computer_wins,
            record.ties,
            record.total_games,
        )
    }
}
