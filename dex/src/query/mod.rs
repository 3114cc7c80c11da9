//! Query helpers for dex display building
//!
//! This module provides the analysis functions the display layer calls once
//! a creature's types and move list are known: weakness listings, counter
//! advice, and the bounded display moveset.

mod moveset;
mod weakness;

pub use moveset::{MOVESET_SIZE, PRIORITY_MOVES, canonical_move_name, recommend};
pub use weakness::{counter_tips, weaknesses};
