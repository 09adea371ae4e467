//! Set layer store
//!
//! A single layer can be stored at a time (or nothing at all).
//! - add: set the single layer
//! - erase: remove the single layer, ignoring what was selected
//! - special: invert the color output

use crate::layers::{self, Color, Layer};

/// Single-slot store with an invert toggle.
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    layer: Option<Layer>,
    special_state: bool,
}

impl SetLayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored layer. Returns whether the store changed: false when
    /// the same layer was already stored, true on a first set or a replace.
    pub fn add(&mut self, layer: Layer) -> bool {
        match self.layer {
            Some(current) if current == layer => false,
            _ => {
                self.layer = Some(layer);
                true
            }
        }
    }

    /// Clear the slot. The argument's identity is ignored; only occupancy
    /// matters.
    pub fn erase(&mut self, _layer: Layer) -> bool {
        self.layer.take().is_some()
    }

    /// Composite `start` through the stored layer, then through the invert
    /// transform when the special state is on. An empty store returns
    /// `start` untouched, special state or not.
    pub fn get_color(&self, start: Color, timestamp: u64, x: u32, y: u32) -> Color {
        let Some(layer) = self.layer else {
            return start;
        };
        let color = layer.apply(start, timestamp, x, y);
        if self.special_state {
            layers::INVERT.apply(color, timestamp, x, y)
        } else {
            color
        }
    }

    /// Toggle inverted output. Returns the new state.
    pub fn special(&mut self) -> bool {
        self.special_state = !self.special_state;
        self.special_state
    }

    /// Whether inverted output is currently on.
    pub fn special_state(&self) -> bool {
        self.special_state
    }

    /// Whether no layer is stored.
    pub fn is_empty(&self) -> bool {
        self.layer.is_none()
    }
}
