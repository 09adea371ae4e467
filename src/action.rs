//! Reversible paint actions
//!
//! A paint action is the unit of grid mutation the history subsystem
//! records and replays: an ordered list of per-cell steps plus an optional
//! grid-wide special sweep. Applying forward adds each step's layer;
//! applying backward erases in reverse order and re-runs the sweep.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, TesseraError};
use crate::grid::Grid;
use crate::layers::Layer;

/// One cell touched by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStep {
    pub x: u32,
    pub y: u32,
    pub layer: Layer,
}

impl PaintStep {
    pub fn new(x: u32, y: u32, layer: Layer) -> Self {
        Self { x, y, layer }
    }
}

/// A replayable, undoable unit of grid mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintAction {
    /// Unique identifier for this action.
    pub id: Uuid,

    /// When the action was built.
    pub created_at: DateTime<Utc>,

    /// Cells touched, in application order.
    pub steps: Vec<PaintStep>,

    /// Whether the action ends with a grid-wide special sweep.
    pub is_special: bool,
}

impl PaintAction {
    /// Create a new action with a generated id.
    pub fn new(steps: Vec<PaintStep>, is_special: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            steps,
            is_special,
        }
    }

    /// Create an action with a specific id (for testing or import).
    pub fn with_id(id: Uuid, steps: Vec<PaintStep>, is_special: bool) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            steps,
            is_special,
        }
    }

    /// A pure special-sweep action with no per-cell steps.
    pub fn special() -> Self {
        Self::new(Vec::new(), true)
    }

    /// Expand a brush stroke centred on `(cx, cy)` into steps covering
    /// every in-bounds cell within Manhattan distance `brush_size`, in
    /// `(x, y)` row-major order.
    pub fn brush_stroke(
        layer: Layer,
        cx: u32,
        cy: u32,
        brush_size: u8,
        width: u32,
        height: u32,
    ) -> Self {
        let reach = i64::from(brush_size);
        let (cx, cy) = (i64::from(cx), i64::from(cy));

        let mut steps = Vec::new();
        for x in cx - reach..=cx + reach {
            if x < 0 || x >= i64::from(width) {
                continue;
            }
            for y in cy - reach..=cy + reach {
                if y < 0 || y >= i64::from(height) {
                    continue;
                }
                if (x - cx).abs() + (y - cy).abs() <= reach {
                    steps.push(PaintStep::new(x as u32, y as u32, layer));
                }
            }
        }

        Self::new(steps, false)
    }

    /// Apply the action forward: add every step's layer in order, then run
    /// the grid-wide special sweep if this action carries one.
    pub fn redo_apply(&self, grid: &mut Grid) -> Result<()> {
        let (width, height) = (grid.width(), grid.height());
        for step in &self.steps {
            let cell = grid
                .cell_mut(step.x, step.y)
                .ok_or(TesseraError::OutOfBounds {
                    x: step.x,
                    y: step.y,
                    width,
                    height,
                })?;
            cell.add(step.layer);
        }
        if self.is_special {
            grid.special();
        }
        Ok(())
    }

    /// Apply the action backward: erase every step's layer in reverse
    /// order, then re-run the special sweep if this action carries one.
    pub fn undo_apply(&self, grid: &mut Grid) -> Result<()> {
        let (width, height) = (grid.width(), grid.height());
        for step in self.steps.iter().rev() {
            let cell = grid
                .cell_mut(step.x, step.y)
                .ok_or(TesseraError::OutOfBounds {
                    x: step.x,
                    y: step.y,
                    width,
                    height,
                })?;
            cell.erase(step.layer);
        }
        if self.is_special {
            grid.special();
        }
        Ok(())
    }
}
