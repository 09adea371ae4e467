//! Undo/redo tracking
//!
//! Two bounded stacks of applied actions. Recording a new action clears
//! the redo stack: a fresh edit invalidates the redo branch of history.

use crate::action::PaintAction;
use crate::error::Result;
use crate::grid::Grid;

/// Default maximum number of recorded actions.
pub const DEFAULT_UNDO_CAPACITY: usize = 10_000;

/// Bounded undo/redo stacks over paint actions.
#[derive(Debug, Clone)]
pub struct UndoTracker {
    undo_stack: Vec<PaintAction>,
    redo_stack: Vec<PaintAction>,
    capacity: usize,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoTracker {
    /// Create a tracker with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// Create a tracker holding at most `capacity` undoable actions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Record a freshly applied action. Returns false, dropping the action
    /// and leaving the redo stack untouched, when the undo stack is at
    /// capacity; otherwise pushes it and clears the redo stack.
    pub fn record(&mut self, action: PaintAction) -> bool {
        if self.undo_stack.len() >= self.capacity {
            return false;
        }
        self.undo_stack.push(action);
        self.redo_stack.clear();
        true
    }

    /// Undo the most recent action against `grid`. Returns `Ok(None)` with
    /// no mutation when there is nothing to undo; otherwise moves the
    /// action to the redo stack, applies its reverse, and returns it.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<Option<PaintAction>> {
        let Some(action) = self.undo_stack.pop() else {
            return Ok(None);
        };
        self.redo_stack.push(action.clone());
        action.undo_apply(grid)?;
        Ok(Some(action))
    }

    /// Redo the most recently undone action against `grid`. Symmetric to
    /// [`UndoTracker::undo`].
    pub fn redo(&mut self, grid: &mut Grid) -> Result<Option<PaintAction>> {
        let Some(action) = self.redo_stack.pop() else {
            return Ok(None);
        };
        self.undo_stack.push(action.clone());
        action.redo_apply(grid)?;
        Ok(Some(action))
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undoable actions.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redoable actions.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PaintStep;
    use crate::layers::{BLACK, LIGHTEN};
    use crate::store::DrawStyle;

    fn draw(x: u32, y: u32) -> PaintAction {
        PaintAction::new(vec![PaintStep::new(x, y, BLACK)], false)
    }

    fn grid() -> Grid {
        Grid::new(DrawStyle::Additive, 4, 4).unwrap()
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = UndoTracker::new();
        assert!(!tracker.can_undo());
        assert!(!tracker.can_redo());
        assert_eq!(tracker.undo_count(), 0);
        assert_eq!(tracker.redo_count(), 0);
    }

    #[test]
    fn test_undo_returns_the_most_recent_action() {
        let mut g = grid();
        let mut tracker = UndoTracker::new();

        let a1 = draw(0, 0);
        let a2 = draw(1, 1);
        a1.redo_apply(&mut g).unwrap();
        a2.redo_apply(&mut g).unwrap();
        assert!(tracker.record(a1.clone()));
        assert!(tracker.record(a2.clone()));

        let undone = tracker.undo(&mut g).unwrap().unwrap();
        assert_eq!(undone, a2);
        assert_eq!(tracker.undo_count(), 1);
        assert_eq!(tracker.redo_count(), 1);
    }

    #[test]
    fn test_redo_restores_the_stack() {
        let mut g = grid();
        let mut tracker = UndoTracker::new();

        let a1 = draw(0, 0);
        let a2 = draw(1, 1);
        tracker.record(a1);
        tracker.record(a2.clone());

        tracker.undo(&mut g).unwrap();
        let redone = tracker.redo(&mut g).unwrap().unwrap();

        assert_eq!(redone, a2);
        assert_eq!(tracker.undo_count(), 2);
        assert_eq!(tracker.redo_count(), 0);
    }

    #[test]
    fn test_undo_on_empty_is_a_no_op() {
        let mut g = grid();
        let mut tracker = UndoTracker::new();

        assert!(tracker.undo(&mut g).unwrap().is_none());
        assert!(tracker.redo(&mut g).unwrap().is_none());
    }

    #[test]
    fn test_record_clears_pending_redos() {
        let mut g = grid();
        let mut tracker = UndoTracker::new();

        tracker.record(draw(0, 0));
        tracker.record(draw(1, 1));
        tracker.undo(&mut g).unwrap();
        assert_eq!(tracker.redo_count(), 1);

        tracker.record(draw(2, 2));
        assert_eq!(tracker.redo_count(), 0);
        assert_eq!(tracker.undo_count(), 2);
    }

    #[test]
    fn test_capacity_overflow_drops_silently() {
        let mut tracker = UndoTracker::with_capacity(2);

        assert!(tracker.record(draw(0, 0)));
        assert!(tracker.record(draw(1, 1)));
        assert!(!tracker.record(draw(2, 2)));
        assert_eq!(tracker.undo_count(), 2);
    }

    #[test]
    fn test_undo_mutates_the_grid() {
        let mut g = grid();
        let mut tracker = UndoTracker::new();

        let action = PaintAction::new(vec![PaintStep::new(2, 2, LIGHTEN)], false);
        action.redo_apply(&mut g).unwrap();
        tracker.record(action);
        assert_eq!(g.cell(2, 2).unwrap().get_color((0, 0, 0), 0, 2, 2), (40, 40, 40));

        tracker.undo(&mut g).unwrap();
        assert_eq!(g.cell(2, 2).unwrap().get_color((0, 0, 0), 0, 2, 2), (0, 0, 0));

        tracker.redo(&mut g).unwrap();
        assert_eq!(g.cell(2, 2).unwrap().get_color((0, 0, 0), 0, 2, 2), (40, 40, 40));
    }
}
