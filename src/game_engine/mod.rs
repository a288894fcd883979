//! Game engine
//!
//! Owns the cumulative statistics and the computer's move source, and
//! turns a player move into a resolved, recorded round.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::errors::{GameError, GameResult};
use crate::models::moves::{resolve, Move, Outcome};
use crate::models::statistics::Statistics;

/// Where the computer's moves come from.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

/// Uniform random moves from a seedable generator.
pub struct RandomMoves {
    rng: StdRng,
}

impl RandomMoves {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// A single played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

/// Core game engine holding the statistics and the opponent
pub struct GameEngine<S = RandomMoves> {
    stats: Statistics,
    source: S,
}

impl GameEngine<RandomMoves> {
    /// Creates an engine over previously loaded statistics with an
    /// entropy-seeded opponent
    pub fn new(stats: Statistics) -> Self {
        Self::with_source(stats, RandomMoves::new())
    }

    /// Creates an engine whose opponent is reproducible from `seed`
    pub fn with_seed(stats: Statistics, seed: u64) -> Self {
        Self::with_source(stats, RandomMoves::with_seed(seed))
    }
}

impl<S: MoveSource> GameEngine<S> {
    pub fn with_source(stats: Statistics, source: S) -> Self {
        Self { stats, source }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn win_rate(&self) -> f64 {
        self.stats.win_rate()
    }

    /// Draws the computer's next move
    pub fn random_move(&mut self) -> Move {
        self.source.next_move()
    }

    /// Plays one round against a freshly drawn computer move and records
    /// the outcome
    pub fn play_round(&mut self, player: Move) -> Round {
        let computer = self.random_move();
        let outcome = resolve(player, computer);
        self.stats.record(outcome);
        log::debug!(
            "round {}: {:?} vs {:?} -> {:?}",
            self.stats.total_games(),
            player,
            computer,
            outcome
        );
        Round {
            player,
            computer,
            outcome,
        }
    }

    /// Like [`play_round`](Self::play_round) but from a raw player token.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] if the token is not a move or alias; no
    /// counter changes in that case.
    pub fn play_token(&mut self, token: &str) -> GameResult<Round> {
        let player = Move::from_token(token)
            .ok_or_else(|| GameError::InvalidMove(token.trim().to_string()))?;
        Ok(self.play_round(player))
    }

    pub fn reset(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Plays back a fixed list of computer moves, cycling when exhausted
    pub struct ScriptedMoves {
        moves: VecDeque<Move>,
    }

    impl ScriptedMoves {
        pub fn new(moves: Vec<Move>) -> Self {
            Self {
                moves: moves.into_iter().collect(),
            }
        }
    }

    impl MoveSource for ScriptedMoves {
        fn next_move(&mut self) -> Move {
            let m = self.moves.pop_front().unwrap_or(Move::Rock);
            self.moves.push_back(m);
            m
        }
    }
}
