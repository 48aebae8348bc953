//! Game-state engine for a minesweeper variant whose mines move while the game is played.
//!
//! Every `reposition_interval` turns the mines are redistributed over the cells that are
//! still hidden, and all hints are recomputed. [`GameEngine::click`] is the single entry
//! point that drives a game.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use outcome::*;
pub use placer::*;
pub use snapshot::*;
pub use turn::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod hints;
mod outcome;
mod placer;
mod reveal;
mod snapshot;
mod turn;
mod types;
