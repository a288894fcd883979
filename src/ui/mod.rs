//! User interface and presentation
//!
//! Presenters format everything the player sees, keeping text out of the
//! session loop.

pub mod presenters;
