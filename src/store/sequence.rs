//! Sequence layer store
//!
//! Each layer type is either applied or not, and applies in index order.
//! - add: ensure the layer type is applied
//! - erase: ensure the layer type is not applied
//! - special: remove the layer with the median name, picking the
//!   lexicographically smaller of two central candidates

use std::collections::BTreeMap;

use crate::layers::{Color, Layer};

/// Identity-keyed store composited in ascending index order.
///
/// Backed by a map keyed on layer index, so a layer type can be present at
/// most once and the capacity bound is the number of distinct layer
/// identities.
#[derive(Debug, Clone, Default)]
pub struct SequenceLayerStore {
    layers: BTreeMap<usize, Layer>,
}

impl SequenceLayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the layer is applied. Returns false when it already was.
    pub fn add(&mut self, layer: Layer) -> bool {
        if self.layers.contains_key(&layer.index) {
            return false;
        }
        self.layers.insert(layer.index, layer);
        true
    }

    /// Ensure the layer is not applied. Returns false when it was absent.
    pub fn erase(&mut self, layer: Layer) -> bool {
        self.layers.remove(&layer.index).is_some()
    }

    /// Composite `start` through every present layer in ascending index
    /// order, independent of the order the layers were added.
    pub fn get_color(&self, start: Color, timestamp: u64, x: u32, y: u32) -> Color {
        self.layers
            .values()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    /// Remove the layer whose name is the lower median among the present
    /// layers' names. No-op when the store is empty.
    pub fn special(&mut self) {
        if self.layers.is_empty() {
            return;
        }
        let mut by_name: Vec<(&'static str, usize)> = self
            .layers
            .values()
            .map(|layer| (layer.name, layer.index))
            .collect();
        by_name.sort();
        let (_, index) = by_name[(by_name.len() - 1) / 2];
        self.layers.remove(&index);
    }

    /// Whether the layer type is currently applied.
    pub fn contains(&self, layer: &Layer) -> bool {
        self.layers.contains_key(&layer.index)
    }

    /// Number of layer types currently applied.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layer types are applied.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{DARKEN, INVERT, LIGHTEN};
    use test_case::test_case;

    const GRAY: Color = (100, 100, 100);

    fn named(index: usize, name: &'static str) -> Layer {
        fn identity(start: Color, _t: u64, _x: u32, _y: u32) -> Color {
            start
        }
        Layer::new(index, name, identity)
    }

    #[test]
    fn test_duplicate_add_is_a_no_op() {
        let mut store = SequenceLayerStore::new();
        assert!(store.add(INVERT));
        assert!(!store.add(INVERT));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_erase_by_identity() {
        let mut store = SequenceLayerStore::new();
        store.add(INVERT);
        store.add(DARKEN);

        assert!(store.erase(INVERT));
        assert!(!store.erase(INVERT));
        assert!(store.contains(&DARKEN));
    }

    // All permutations of the same layer set composite identically: the
    // applied order is index order, not insertion order.
    #[test_case(&[DARKEN, INVERT, LIGHTEN])]
    #[test_case(&[INVERT, LIGHTEN, DARKEN])]
    #[test_case(&[LIGHTEN, DARKEN, INVERT])]
    #[test_case(&[LIGHTEN, INVERT, DARKEN])]
    fn test_get_color_is_insertion_order_invariant(order: &[Layer]) {
        let mut store = SequenceLayerStore::new();
        for layer in order {
            store.add(*layer);
        }

        // darken(100) = 60, invert(60) = 195, lighten(195) = 235
        assert_eq!(store.get_color(GRAY, 0, 0, 0), (235, 235, 235));
    }

    #[test]
    fn test_special_removes_median_name() {
        let mut store = SequenceLayerStore::new();
        let b = named(0, "b");
        let a = named(1, "a");
        let c = named(2, "c");
        store.add(b);
        store.add(a);
        store.add(c);

        store.special();

        assert!(!store.contains(&b));
        assert!(store.contains(&a));
        assert!(store.contains(&c));
    }

    #[test]
    fn test_special_prefers_lower_of_two_medians() {
        let mut store = SequenceLayerStore::new();
        let b = named(0, "b");
        let a = named(1, "a");
        store.add(b);
        store.add(a);

        store.special();

        assert!(!store.contains(&a));
        assert!(store.contains(&b));
    }

    #[test]
    fn test_special_on_empty_is_a_no_op() {
        let mut store = SequenceLayerStore::new();
        store.special();
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_color_on_empty_returns_start() {
        let store = SequenceLayerStore::new();
        assert_eq!(store.get_color(GRAY, 0, 0, 0), GRAY);
    }
}
