use crate::LazyLoadType;
use crate::options::LazyLoader;

/// The lazy-loading collaborator.
///
/// It decides on its own which items to materialize; the sequence only tells it how far ahead
/// to look and when the visible region has settled.
pub trait LazyLoadSink {
    /// Lookahead distance in pixels along the active axis.
    fn set_threshold(&self, pixels: u64);

    /// The holder has settled at a new offset.
    fn update(&self);
}

/// Lookahead distance in pixels: `count` pages (container extents) or `count` of the largest
/// item.
pub fn threshold_pixels(
    lazy_load_type: LazyLoadType,
    count: u32,
    container_extent: u32,
    max_item_extent: u32,
) -> u64 {
    let unit = match lazy_load_type {
        LazyLoadType::Page => container_extent,
        LazyLoadType::Item => max_item_extent,
    };
    (count as u64).saturating_mul(unit as u64)
}

/// Forwards layout state to the optional lazy loader.
#[derive(Clone, Default)]
pub(crate) struct LookaheadNotifier {
    sink: Option<LazyLoader>,
    threshold: u64,
}

impl LookaheadNotifier {
    pub(crate) fn new(sink: Option<LazyLoader>, threshold: u64) -> Self {
        if let Some(sink) = &sink {
            sdebug!(threshold, "lazy loader threshold");
            sink.set_threshold(threshold);
        }
        Self { sink, threshold }
    }

    pub(crate) fn threshold(&self) -> u64 {
        self.threshold
    }

    pub(crate) fn settled(&self) {
        if let Some(sink) = &self.sink {
            sink.update();
        }
    }
}

impl core::fmt::Debug for LookaheadNotifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LookaheadNotifier")
            .field("sink", &self.sink.is_some())
            .field("threshold", &self.threshold)
            .finish()
    }
}
