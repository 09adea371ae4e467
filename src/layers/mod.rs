//! Layer definitions
//!
//! A layer is a named, pure color transform with a stable registry identity.
//! The registry assigns dense indices in declaration order; the index is the
//! layer's identity everywhere in the crate, and the name is what scripts and
//! the sequence store's median removal work with.

use std::fmt;

/// An RGB color triple. All transform arithmetic saturates per channel.
pub type Color = (u8, u8, u8);

/// Signature shared by every layer transform.
///
/// Transforms are pure functions of the input color, a timestamp, and the
/// cell coordinates. They run in O(1) and never panic.
pub type Transform = fn(Color, u64, u32, u32) -> Color;

/// A named, pure color transform with a stable ordering index.
#[derive(Clone, Copy)]
pub struct Layer {
    /// Position in the registry; dense and stable.
    pub index: usize,
    /// Name used for lexicographic tie-breaks and script lookup.
    pub name: &'static str,
    transform: Transform,
}

impl Layer {
    /// Build a layer from its registry slot and transform.
    pub const fn new(index: usize, name: &'static str, transform: Transform) -> Self {
        Self {
            index,
            name,
            transform,
        }
    }

    /// Run the transform against `start` at the given cell and time.
    pub fn apply(&self, start: Color, timestamp: u64, x: u32, y: u32) -> Color {
        (self.transform)(start, timestamp, x, y)
    }
}

// Identity is the registry index alone; two layers with the same index are
// the same layer no matter where the values were constructed.
impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Layer {}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}

fn black(_start: Color, _timestamp: u64, _x: u32, _y: u32) -> Color {
    (0, 0, 0)
}

fn darken((r, g, b): Color, _timestamp: u64, _x: u32, _y: u32) -> Color {
    (
        r.saturating_sub(40),
        g.saturating_sub(40),
        b.saturating_sub(40),
    )
}

fn invert((r, g, b): Color, _timestamp: u64, _x: u32, _y: u32) -> Color {
    (255 - r, 255 - g, 255 - b)
}

fn lighten((r, g, b): Color, _timestamp: u64, _x: u32, _y: u32) -> Color {
    (
        r.saturating_add(40),
        g.saturating_add(40),
        b.saturating_add(40),
    )
}

fn rainbow(_start: Color, timestamp: u64, x: u32, y: u32) -> Color {
    let phase = timestamp.wrapping_add(x as u64).wrapping_add(y as u64) as f64;
    let channel = |offset: f64| (((phase / 5.0 + offset).sin() + 1.0) * 127.5) as u8;
    (channel(0.0), channel(2.0), channel(4.0))
}

/// Paint the cell black regardless of input.
pub const BLACK: Layer = Layer::new(0, "black", black);
/// Subtract 40 from every channel, saturating at 0.
pub const DARKEN: Layer = Layer::new(1, "darken", darken);
/// Invert every channel.
pub const INVERT: Layer = Layer::new(2, "invert", invert);
/// Add 40 to every channel, saturating at 255.
pub const LIGHTEN: Layer = Layer::new(3, "lighten", lighten);
/// Deterministic channel waves over `timestamp + x + y`.
pub const RAINBOW: Layer = Layer::new(4, "rainbow", rainbow);

/// Every registered layer, in index order.
pub static LAYERS: [Layer; 5] = [BLACK, DARKEN, INVERT, LIGHTEN, RAINBOW];

/// Look a registered layer up by name.
pub fn by_name(name: &str) -> Option<Layer> {
    LAYERS.iter().find(|layer| layer.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_indices_are_dense() {
        for (position, layer) in LAYERS.iter().enumerate() {
            assert_eq!(layer.index, position);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("invert"), Some(INVERT));
        assert_eq!(by_name("rainbow"), Some(RAINBOW));
        assert_eq!(by_name("sparkle"), None);
    }

    #[test]
    fn test_identity_is_by_index() {
        let other_invert = Layer::new(2, "renamed", black);
        assert_eq!(other_invert, INVERT);
        assert_ne!(BLACK, INVERT);
    }

    #[test]
    fn test_invert_round_trips() {
        let color = (12, 200, 77);
        let once = INVERT.apply(color, 0, 0, 0);
        assert_eq!(once, (243, 55, 178));
        assert_eq!(INVERT.apply(once, 0, 0, 0), color);
    }

    #[test]
    fn test_lighten_and_darken_saturate() {
        assert_eq!(LIGHTEN.apply((250, 100, 0), 0, 0, 0), (255, 140, 40));
        assert_eq!(DARKEN.apply((30, 100, 255), 0, 0, 0), (0, 60, 215));
    }

    #[test]
    fn test_black_ignores_input() {
        assert_eq!(BLACK.apply((1, 2, 3), 42, 7, 7), (0, 0, 0));
        assert_eq!(BLACK.apply((255, 255, 255), 0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_rainbow_is_deterministic() {
        let a = RAINBOW.apply((0, 0, 0), 1000, 3, 4);
        let b = RAINBOW.apply((255, 255, 255), 1000, 3, 4);
        assert_eq!(a, b);

        let shifted = RAINBOW.apply((0, 0, 0), 1003, 3, 4);
        assert_ne!(a, shifted);
    }
}
