//! Core types: players, snapshots, the history timeline, dice.
//!
//! This module holds the tracked state and its bounded undo/redo history.
//! Everything above it (command parsing, the session, rendering) is a thin
//! layer over these types.

pub mod dice;
pub mod player;
pub mod snapshot;
pub mod timeline;

pub use dice::{CoinFace, Dice};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use snapshot::{DamageMatrix, GameMode, MatchSnapshot};
pub use timeline::{Timeline, MAX_HISTORY};
