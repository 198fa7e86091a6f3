use alloc::vec::Vec;

use crate::{Direction, ItemMeasurer, Orientation};

/// A previous/next neighbor pair. `None` marks a boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Links {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl Links {
    pub fn get(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Previous => self.previous,
            Direction::Next => self.next,
        }
    }
}

/// Names one of the three independent orderings of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkSet {
    /// Followed by autoscroll; wraps only when the finish action is `rewind`.
    Linear,
    /// Followed by paging buttons; wraps only with `paging_loop`.
    Paging,
    /// Followed by keyboard navigation; wraps only with `key_scroll_loop`.
    KeyScroll,
}

/// One element of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub index: usize,
    /// Extent along the active axis.
    pub extent: u32,
    /// Position inside the holder along the active axis.
    pub position: u64,
    pub linear: Links,
    pub paging: Links,
    pub key_scroll: Links,
}

impl Item {
    pub fn links(&self, set: LinkSet) -> Links {
        match set {
            LinkSet::Linear => self.linear,
            LinkSet::Paging => self.paging,
            LinkSet::KeyScroll => self.key_scroll,
        }
    }

    pub fn neighbor(&self, set: LinkSet, direction: Direction) -> Option<usize> {
        self.links(set).get(direction)
    }

    pub fn end(&self) -> u64 {
        self.position.saturating_add(self.extent as u64)
    }
}

/// Loop flags for the three link sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoopFlags {
    pub(crate) linear: bool,
    pub(crate) paging: bool,
    pub(crate) key_scroll: bool,
}

fn chain(index: usize, count: usize, wrap: bool) -> Links {
    let last = count - 1;
    Links {
        previous: match index {
            0 if wrap => Some(last),
            0 => None,
            i => Some(i - 1),
        },
        next: match index {
            i if i == last && wrap => Some(0),
            i if i == last => None,
            i => Some(i + 1),
        },
    }
}

/// Measures every item and wires the three link sets.
pub(crate) fn build_items(
    measurer: &impl ItemMeasurer,
    orientation: Orientation,
    loops: LoopFlags,
) -> Vec<Item> {
    let count = measurer.item_count();
    (0..count)
        .map(|index| Item {
            index,
            extent: measurer.extent_of(index, orientation),
            position: measurer.position_of(index, orientation),
            linear: chain(index, count, loops.linear),
            paging: chain(index, count, loops.paging),
            key_scroll: chain(index, count, loops.key_scroll),
        })
        .collect()
}
