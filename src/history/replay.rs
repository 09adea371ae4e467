//! Replay tracking
//!
//! A bounded FIFO queue of recorded actions drained in exactly the order
//! they were recorded, including interleaved undo steps, so a recorded
//! edit session reproduces deterministically on a fresh grid.

use std::collections::VecDeque;

use crate::action::PaintAction;
use crate::error::Result;
use crate::grid::Grid;

/// Default maximum number of recorded entries.
pub const DEFAULT_REPLAY_CAPACITY: usize = 1_000;

/// Phase of a replay session. The only transition is Recording to Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    Recording,
    Playing,
}

/// Bounded FIFO recorder and player for paint actions.
#[derive(Debug, Clone)]
pub struct ReplayTracker {
    queue: VecDeque<(PaintAction, bool)>,
    capacity: usize,
    phase: ReplayPhase,
}

impl Default for ReplayTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayTracker {
    /// Create a tracker with the default capacity, in the recording phase.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
    }

    /// Create a tracker holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            phase: ReplayPhase::Recording,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ReplayPhase {
        self.phase
    }

    /// Record an action. `is_undo` marks entries that entered history as
    /// undo steps; special, redo, and draw all record with false. Returns
    /// false, dropping the entry, once playback has begun or when the
    /// queue is full.
    pub fn record(&mut self, action: PaintAction, is_undo: bool) -> bool {
        if self.phase == ReplayPhase::Playing || self.queue.len() >= self.capacity {
            return false;
        }
        self.queue.push_back((action, is_undo));
        true
    }

    /// Stop taking recordings and start playing them back. Idempotent; the
    /// mode switch is the only effect.
    pub fn start_replay(&mut self) {
        self.phase = ReplayPhase::Playing;
    }

    /// Play the next recorded action against `grid`. Returns `Ok(true)`
    /// with no mutation when nothing was left to play, `Ok(false)` after
    /// applying the head entry (backward when it was recorded as an undo,
    /// forward otherwise).
    pub fn step(&mut self, grid: &mut Grid) -> Result<bool> {
        let Some((action, is_undo)) = self.queue.pop_front() else {
            return Ok(true);
        };
        if is_undo {
            action.undo_apply(grid)?;
        } else {
            action.redo_apply(grid)?;
        }
        Ok(false)
    }

    /// Number of entries still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
