use crate::Item;

/// Pure conversions between items, pixel positions and valid scroll offsets.
///
/// Positions are signed: a centered offset for an item larger than the container, or a page
/// step before the holder start, can go negative before clamping.
#[derive(Clone, Copy, Debug)]
pub struct OffsetModel<'a> {
    items: &'a [Item],
    container_extent: u32,
    holder_extent: u64,
    center_focus: bool,
    scroll_snap: bool,
}

impl<'a> OffsetModel<'a> {
    pub fn new(items: &'a [Item], container_extent: u32, holder_extent: u64) -> Self {
        Self {
            items,
            container_extent,
            holder_extent,
            center_focus: false,
            scroll_snap: false,
        }
    }

    pub fn with_centering(mut self, center_focus: bool, scroll_snap: bool) -> Self {
        self.center_focus = center_focus;
        self.scroll_snap = scroll_snap;
        self
    }

    /// Largest valid scroll offset: `holder_extent - container_extent`, or 0 when everything
    /// fits in the container.
    pub fn max_scroll(&self) -> u64 {
        self.holder_extent
            .saturating_sub(self.container_extent as u64)
    }

    /// Clamps a position to `[0, max_scroll]`.
    pub fn clamp(&self, position: i64) -> u64 {
        if position <= 0 {
            return 0;
        }
        (position as u64).min(self.max_scroll())
    }

    /// The unclamped scroll offset that shows `index`.
    ///
    /// With `center` (and centering enabled) the item is centered in the container. With
    /// snapping also enabled, the centered offset is moved onto the raw position of the item
    /// closest to it, so the result always sits on an item boundary.
    pub fn offset_for_item(&self, index: usize, center: bool) -> Option<i64> {
        let item = self.items.get(index)?;
        let mut offset = item.position as i64;
        if center && self.center_focus {
            offset -= (self.container_extent as i64 - item.extent as i64) / 2;
            if self.scroll_snap {
                let snapped = self.closest_slot(offset)?;
                offset = self.items[snapped].position as i64;
            }
        }
        Some(offset)
    }

    /// Index of the item whose raw position is nearest to `position`.
    ///
    /// The position is first clamped to `[0, holder_extent]`, the full holder rather than the
    /// scrollable range, so the trailing items stay reachable by pixel queries. Ties resolve to
    /// the lowest index.
    pub fn closest_item(&self, position: i64) -> Option<usize> {
        self.closest_slot(position).map(|slot| self.items[slot].index)
    }

    fn closest_slot(&self, position: i64) -> Option<usize> {
        let position = position.clamp(0, self.holder_extent.min(i64::MAX as u64) as i64) as u64;

        let mut closest: Option<(usize, u64)> = None;
        for (slot, item) in self.items.iter().enumerate() {
            let distance = item.position.abs_diff(position);
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((slot, distance)),
            }
        }
        closest.map(|(slot, _)| slot)
    }
}
