//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod archer;
pub mod distribution;
pub mod event;
pub mod leaderboard;
pub mod parse;
