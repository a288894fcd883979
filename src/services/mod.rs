//! Game services
//!
//! Statistics persistence and the interactive session loop.

pub mod persistence;
pub mod session;
