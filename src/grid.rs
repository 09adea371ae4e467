//! Painting surface grid
//!
//! A fixed-size matrix of layer stores, all sharing one draw style chosen
//! at construction, plus the grid-wide brush-size bookkeeping. Cells are
//! independent; nothing crosses cell boundaries except the special sweep.

use log::debug;

use crate::error::{Result, TesseraError};
use crate::layers::Color;
use crate::store::{DrawStyle, LayerStore};

/// Brush size a freshly constructed grid starts with.
pub const DEFAULT_BRUSH_SIZE: u8 = 2;

/// Upper brush size bound.
pub const MAX_BRUSH: u8 = 5;

/// Lower brush size bound.
pub const MIN_BRUSH: u8 = 0;

/// A `width x height` matrix of layer stores.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<LayerStore>>,
    style: DrawStyle,
    brush_size: u8,
}

impl Grid {
    /// Allocate the grid. Every cell starts as the empty store variant
    /// selected by `style`; the matrix is never resized afterwards.
    pub fn new(style: DrawStyle, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TesseraError::InvalidDimensions { width, height });
        }

        debug!("allocating {}x{} grid with {} cells", width, height, style);

        let cells = (0..width)
            .map(|_| (0..height).map(|_| LayerStore::for_style(style)).collect())
            .collect();

        Ok(Self {
            cells,
            style,
            brush_size: DEFAULT_BRUSH_SIZE,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.cells.first().map_or(0, |column| column.len()) as u32
    }

    /// The compositing policy every cell uses.
    pub fn style(&self) -> DrawStyle {
        self.style
    }

    /// Current brush size, in `[MIN_BRUSH, MAX_BRUSH]`.
    pub fn brush_size(&self) -> u8 {
        self.brush_size
    }

    /// The store at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: u32, y: u32) -> Option<&LayerStore> {
        self.cells.get(x as usize)?.get(y as usize)
    }

    /// Mutable access to the store at `(x, y)`, or `None` outside the grid.
    pub fn cell_mut(&mut self, x: u32, y: u32) -> Option<&mut LayerStore> {
        self.cells.get_mut(x as usize)?.get_mut(y as usize)
    }

    /// Grow the brush by one. Returns false, leaving the size untouched,
    /// when already at [`MAX_BRUSH`].
    pub fn increase_brush_size(&mut self) -> bool {
        if self.brush_size >= MAX_BRUSH {
            return false;
        }
        self.brush_size += 1;
        true
    }

    /// Shrink the brush by one. Returns false, leaving the size untouched,
    /// when already at [`MIN_BRUSH`].
    pub fn decrease_brush_size(&mut self) -> bool {
        if self.brush_size <= MIN_BRUSH {
            return false;
        }
        self.brush_size -= 1;
        true
    }

    /// Trigger the special effect on every cell, visiting cells in `(x, y)`
    /// row-major order. The sweep is not transactional: there is no
    /// rollback once a cell has been visited.
    pub fn special(&mut self) {
        for column in &mut self.cells {
            for cell in column {
                cell.special();
            }
        }
    }

    /// Composite every cell against `start` at `timestamp`. Pure; the grid
    /// is unchanged.
    pub fn render(&self, start: Color, timestamp: u64) -> Vec<Vec<Color>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(x, column)| {
                column
                    .iter()
                    .enumerate()
                    .map(|(y, cell)| cell.get_color(start, timestamp, x as u32, y as u32))
                    .collect()
            })
            .collect()
    }
}
