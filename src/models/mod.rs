//! Domain models
//!
//! Moves, outcomes, commands and the statistics counters. Models are
//! plain data with minimal logic.

pub mod command;
pub mod constants;
pub mod errors;
pub mod moves;
pub mod statistics;
