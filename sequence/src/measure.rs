use alloc::vec::Vec;

use crate::{Orientation, Size};

/// Geometry provider for a sequence.
///
/// The UI layer measures its elements once at setup; the sequence caches every value and never
/// asks again. All positions are relative to the holder origin along the active axis.
pub trait ItemMeasurer {
    fn item_count(&self) -> usize;

    /// Extent of item `index` along the active axis.
    fn extent_of(&self, index: usize, orientation: Orientation) -> u32;

    /// Position of item `index` inside the holder along the active axis.
    fn position_of(&self, index: usize, orientation: Orientation) -> u64;

    /// Extent of the visible container along the active axis.
    fn container_extent(&self, orientation: Orientation) -> u32;

    /// Full holder length along the active axis.
    fn holder_extent(&self, orientation: Orientation) -> u64;
}

/// A holder that lays items end to end, each followed by its trailing margin.
///
/// This is the layout produced by floating items inside a holder that grows by
/// `extent + margin` per item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripLayout {
    container: Size,
    items: Vec<Size>,
    margin: u32,
    /// Running `extent + margin` sums per axis: entry `i` is where item `i + 1` starts.
    ends_x: Vec<u64>,
    ends_y: Vec<u64>,
}

impl StripLayout {
    pub fn new(container: Size, items: impl IntoIterator<Item = Size>) -> Self {
        let mut layout = Self {
            container,
            items: items.into_iter().collect(),
            margin: 0,
            ends_x: Vec::new(),
            ends_y: Vec::new(),
        };
        layout.rebuild_ends();
        layout
    }

    /// A strip of items that all share one size.
    pub fn uniform(container: Size, item: Size, count: usize) -> Self {
        Self::new(container, core::iter::repeat_n(item, count))
    }

    /// Horizontal convenience constructor: only widths matter.
    pub fn horizontal(container_width: u32, widths: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            Size::new(container_width, 0),
            widths.into_iter().map(|w| Size::new(w, 0)),
        )
    }

    /// Vertical convenience constructor: only heights matter.
    pub fn vertical(container_height: u32, heights: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            Size::new(0, container_height),
            heights.into_iter().map(|h| Size::new(0, h)),
        )
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self.rebuild_ends();
        self
    }

    pub fn push(&mut self, item: Size) {
        self.items.push(item);
        self.push_end(item);
    }

    fn rebuild_ends(&mut self) {
        self.ends_x.clear();
        self.ends_y.clear();
        for i in 0..self.items.len() {
            self.push_end(self.items[i]);
        }
    }

    fn push_end(&mut self, item: Size) {
        let margin = self.margin as u64;
        let x = self.ends_x.last().copied().unwrap_or(0);
        let y = self.ends_y.last().copied().unwrap_or(0);
        self.ends_x.push(x + item.width as u64 + margin);
        self.ends_y.push(y + item.height as u64 + margin);
    }

    fn ends(&self, orientation: Orientation) -> &[u64] {
        match orientation {
            Orientation::Horizontal => &self.ends_x,
            Orientation::Vertical => &self.ends_y,
        }
    }
}

impl ItemMeasurer for StripLayout {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn extent_of(&self, index: usize, orientation: Orientation) -> u32 {
        self.items
            .get(index)
            .map(|s| s.extent(orientation))
            .unwrap_or(0)
    }

    fn position_of(&self, index: usize, orientation: Orientation) -> u64 {
        let ends = self.ends(orientation);
        match index.min(ends.len()) {
            0 => 0,
            i => ends[i - 1],
        }
    }

    fn container_extent(&self, orientation: Orientation) -> u32 {
        self.container.extent(orientation)
    }

    fn holder_extent(&self, orientation: Orientation) -> u64 {
        self.position_of(self.items.len(), orientation)
    }
}
