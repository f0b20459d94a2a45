//! # lifetally
//!
//! A turn-based life and poison tracker for tabletop matches, built around
//! a bounded snapshot history with undo/redo.
//!
//! ## Design Principles
//!
//! 1. **Snapshots are opaque values**: the history stores whole-value
//!    copies of [`MatchSnapshot`] and never interprets its fields. A stored
//!    entry can never alias the working copy a command mutates.
//!
//! 2. **One writer, total order**: the [`Timeline`] is owned by a single
//!    [`Session`]; every operation runs to completion before the next
//!    command is read.
//!
//! 3. **Boundaries are statuses, not errors**: undo at the oldest entry and
//!    redo at the newest are reported no-ops. The core operations are total.
//!
//! ## Modules
//!
//! - `core`: players, match snapshots, the history timeline, dice
//! - `command`: text command parsing
//! - `session`: the command processor driving the timeline
//! - `render`: console tables and help text

pub mod command;
pub mod core;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CoinFace, DamageMatrix, Dice, GameMode, MatchSnapshot, PlayerId, PlayerMap, Timeline,
    MAX_HISTORY, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::command::{Command, ParseError};

pub use crate::session::{Reply, Session};
