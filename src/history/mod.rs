//! Action history
//!
//! Bounded undo/redo stacks and the FIFO replay queue. Both trackers own
//! their containers outright and touch a grid only through the actions
//! they re-invoke.

pub mod replay;
pub mod undo;

pub use replay::{ReplayPhase, ReplayTracker, DEFAULT_REPLAY_CAPACITY};
pub use undo::{UndoTracker, DEFAULT_UNDO_CAPACITY};
