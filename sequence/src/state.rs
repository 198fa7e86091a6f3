use crate::{AutoScrollTimer, Direction, Sequence};

/// A lightweight, serializable snapshot of a sequence's navigation state.
///
/// Geometry and options are not part of the snapshot: restore it into a sequence built from the
/// same items.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSnapshot {
    pub current_item: Option<usize>,
    pub key_scroll_item: Option<usize>,
    pub direction: Direction,
    pub scroll_position: u64,
    pub paused: bool,
}

impl Sequence {
    pub fn snapshot(&self) -> SequenceSnapshot {
        SequenceSnapshot {
            current_item: self.current_item(),
            key_scroll_item: self.key_scroll_item(),
            direction: self.direction(),
            scroll_position: self.scroll_position(),
            paused: self.is_paused(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// Out-of-range indexes are ignored, the scroll position is clamped, any in-flight
    /// transition is superseded and the autoscroll timer is re-armed (unless the snapshot is
    /// paused). Returns the newly armed timer, if any.
    pub fn restore_snapshot(&mut self, snapshot: SequenceSnapshot) -> Option<AutoScrollTimer> {
        sdebug!(
            current_item = ?snapshot.current_item,
            scroll_position = snapshot.scroll_position,
            paused = snapshot.paused,
            "restore_snapshot"
        );
        self.restore_parts(
            snapshot.current_item,
            snapshot.key_scroll_item,
            snapshot.direction,
            snapshot.scroll_position,
            snapshot.paused,
        )
    }
}
