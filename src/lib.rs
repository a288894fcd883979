//! Rock-Paper-Scissors
//!
//! A terminal Rock-Paper-Scissors game against a randomly playing
//! computer, with win/loss/tie statistics kept in a JSON file between
//! runs.
//!
//! # Modules
//!
//! - [`game_engine`] - Round resolution, the computer's move source and counters
//! - [`models`] - Domain models (Move, Outcome, Command, Statistics)
//! - [`services`] - Statistics persistence and the session state machine
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use rps::{GameEngine, Move, Statistics};
//!
//! let mut engine = GameEngine::with_seed(Statistics::new(), 42);
//! let round = engine.play_round(Move::Rock);
//! assert_eq!(engine.statistics().total_games(), 1);
//! # let _ = round;
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, MoveSource, RandomMoves, Round};
pub use models::errors::{GameError, GameResult};
pub use models::moves::{resolve, Move, Outcome};
pub use models::statistics::Statistics;
pub use services::persistence::StatsStore;
pub use services::session::{Session, SessionState};
