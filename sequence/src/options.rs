use alloc::string::ToString;
use alloc::sync::Arc;

use crate::lookahead::LazyLoadSink;
use crate::types::Granularity;
use crate::{ConfigError, FinishAction, Item, KeyScrollType, LazyLoadType, Orientation};

/// A callback fired whenever an item receives focus.
pub type FocusCallback = Arc<dyn Fn(&Item) + Send + Sync>;

/// A shared handle to the optional lazy-loading collaborator.
pub type LazyLoader = Arc<dyn LazyLoadSink + Send + Sync>;

/// Configuration for [`crate::Sequence`].
///
/// Defaults match a centered, snapping, auto-advancing horizontal carousel with looping
/// buttons and keyboard navigation. The type is cheap to clone; the lazy loader is shared.
pub struct SequenceOptions {
    pub orientation: Orientation,

    /// Center the target item in the container when navigating per item.
    pub center_focus: bool,
    /// When centering, land the final offset exactly on the nearest item boundary.
    pub scroll_snap: bool,

    pub auto_scroll: bool,
    pub auto_scroll_type: Granularity,
    pub auto_scroll_delay_ms: u64,
    pub auto_scroll_finish_action: FinishAction,

    pub paging_type: Granularity,
    pub paging_loop: bool,

    pub key_scroll_type: KeyScrollType,
    pub key_scroll_loop: bool,
    pub use_key_scroll: bool,

    /// Animate transitions over `scroll_duration_ms`; when off, every transition snaps.
    pub smooth_scroll: bool,
    pub scroll_duration_ms: u64,

    /// Clicking an item scrolls to it and focuses it.
    pub focus_on_click: bool,
    /// Whether clicks on items propagate to the UI layer after navigation.
    pub enable_click_events: bool,

    /// Pause autoscroll while the pointer is over the container (adapter-driven).
    pub pause_on_hover: bool,

    pub lazy_loader: Option<LazyLoader>,
    pub lazy_load_type: LazyLoadType,
    /// Lookahead, counted in pages or items depending on `lazy_load_type`.
    pub lazy_load_threshold: u32,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            center_focus: true,
            scroll_snap: true,
            auto_scroll: true,
            auto_scroll_type: Granularity::PerItem,
            auto_scroll_delay_ms: 5_000,
            auto_scroll_finish_action: FinishAction::Reverse,
            paging_type: Granularity::PerItem,
            paging_loop: true,
            key_scroll_type: KeyScrollType::PerItemAndFocus,
            key_scroll_loop: true,
            use_key_scroll: true,
            smooth_scroll: true,
            scroll_duration_ms: 1_000,
            focus_on_click: true,
            enable_click_events: false,
            pause_on_hover: false,
            lazy_loader: None,
            lazy_load_type: LazyLoadType::Item,
            lazy_load_threshold: 1,
        }
    }
}

impl Clone for SequenceOptions {
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            center_focus: self.center_focus,
            scroll_snap: self.scroll_snap,
            auto_scroll: self.auto_scroll,
            auto_scroll_type: self.auto_scroll_type,
            auto_scroll_delay_ms: self.auto_scroll_delay_ms,
            auto_scroll_finish_action: self.auto_scroll_finish_action,
            paging_type: self.paging_type,
            paging_loop: self.paging_loop,
            key_scroll_type: self.key_scroll_type,
            key_scroll_loop: self.key_scroll_loop,
            use_key_scroll: self.use_key_scroll,
            smooth_scroll: self.smooth_scroll,
            scroll_duration_ms: self.scroll_duration_ms,
            focus_on_click: self.focus_on_click,
            enable_click_events: self.enable_click_events,
            pause_on_hover: self.pause_on_hover,
            lazy_loader: self.lazy_loader.clone(),
            lazy_load_type: self.lazy_load_type,
            lazy_load_threshold: self.lazy_load_threshold,
        }
    }
}

impl SequenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_center_focus(mut self, center_focus: bool) -> Self {
        self.center_focus = center_focus;
        self
    }

    pub fn with_scroll_snap(mut self, scroll_snap: bool) -> Self {
        self.scroll_snap = scroll_snap;
        self
    }

    /// Enables autoscroll with the given granularity and delay.
    pub fn with_auto_scroll(mut self, auto_scroll_type: Granularity, delay_ms: u64) -> Self {
        self.auto_scroll = true;
        self.auto_scroll_type = auto_scroll_type;
        self.auto_scroll_delay_ms = delay_ms;
        self
    }

    pub fn without_auto_scroll(mut self) -> Self {
        self.auto_scroll = false;
        self
    }

    pub fn with_finish_action(mut self, finish_action: FinishAction) -> Self {
        self.auto_scroll_finish_action = finish_action;
        self
    }

    pub fn with_paging(mut self, paging_type: Granularity, paging_loop: bool) -> Self {
        self.paging_type = paging_type;
        self.paging_loop = paging_loop;
        self
    }

    pub fn with_key_scroll(mut self, key_scroll_type: KeyScrollType, key_scroll_loop: bool) -> Self {
        self.use_key_scroll = true;
        self.key_scroll_type = key_scroll_type;
        self.key_scroll_loop = key_scroll_loop;
        self
    }

    pub fn with_use_key_scroll(mut self, use_key_scroll: bool) -> Self {
        self.use_key_scroll = use_key_scroll;
        self
    }

    /// `None` disables animation: every transition snaps.
    pub fn with_smooth_scroll(mut self, duration_ms: Option<u64>) -> Self {
        match duration_ms {
            Some(ms) => {
                self.smooth_scroll = true;
                self.scroll_duration_ms = ms;
            }
            None => self.smooth_scroll = false,
        }
        self
    }

    pub fn with_click(mut self, focus_on_click: bool, enable_click_events: bool) -> Self {
        self.focus_on_click = focus_on_click;
        self.enable_click_events = enable_click_events;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_lazy_loader(
        mut self,
        lazy_loader: impl LazyLoadSink + Send + Sync + 'static,
        lazy_load_type: LazyLoadType,
        lazy_load_threshold: u32,
    ) -> Self {
        self.lazy_loader = Some(Arc::new(lazy_loader));
        self.lazy_load_type = lazy_load_type;
        self.lazy_load_threshold = lazy_load_threshold;
        self
    }

    pub fn with_shared_lazy_loader(mut self, lazy_loader: Option<LazyLoader>) -> Self {
        self.lazy_loader = lazy_loader;
        self
    }

    /// Applies one string-keyed option, as found in markup attributes or config files.
    ///
    /// Keys use the camelCase names of the classic widget (`pagingType`, `autoScrollDelay`),
    /// enum values are kebab-case (`per-item-and-focus`), and durations are in seconds.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "orientation" => self.orientation = value.parse()?,
            "centerFocus" => self.center_focus = parse_bool("centerFocus", value)?,
            "scrollSnap" => self.scroll_snap = parse_bool("scrollSnap", value)?,
            "autoScroll" => self.auto_scroll = parse_bool("autoScroll", value)?,
            "autoScrollType" => {
                self.auto_scroll_type = Granularity::parse("autoScrollType", value)?;
            }
            "autoScrollDelay" => {
                self.auto_scroll_delay_ms = parse_seconds_as_ms("autoScrollDelay", value)?;
            }
            "autoScrollFinishAction" => self.auto_scroll_finish_action = value.parse()?,
            "pagingType" => self.paging_type = Granularity::parse("pagingType", value)?,
            "pagingLoop" => self.paging_loop = parse_bool("pagingLoop", value)?,
            "keyScrollType" => self.key_scroll_type = value.parse()?,
            "keyScrollLoop" => self.key_scroll_loop = parse_bool("keyScrollLoop", value)?,
            "useKeyScroll" => self.use_key_scroll = parse_bool("useKeyScroll", value)?,
            "smoothScroll" => self.smooth_scroll = parse_bool("smoothScroll", value)?,
            "scrollDuration" => {
                self.scroll_duration_ms = parse_seconds_as_ms("scrollDuration", value)?;
            }
            "focusOnClick" => self.focus_on_click = parse_bool("focusOnClick", value)?,
            "enableClickEvents" => {
                self.enable_click_events = parse_bool("enableClickEvents", value)?;
            }
            "useMouseStop" => self.pause_on_hover = parse_bool("useMouseStop", value)?,
            "lazyLoadType" => self.lazy_load_type = value.parse()?,
            "lazyLoadThreshold" => {
                self.lazy_load_threshold = value.parse().map_err(|_| ConfigError::InvalidValue {
                    option: "lazyLoadThreshold",
                    value: value.to_string(),
                    reason: "expected a non-negative integer",
                })?;
            }
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Builds options from string key/value pairs on top of the defaults.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        options.validate()?;
        Ok(options)
    }

    /// Checks cross-field constraints. Called by `Sequence::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_scroll && self.auto_scroll_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                option: "autoScrollDelay",
                value: "0".to_string(),
                reason: "autoscroll needs a positive delay",
            });
        }
        Ok(())
    }
}

fn parse_bool(option: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            option,
            value: other.to_string(),
            reason: "expected `true` or `false`",
        }),
    }
}

fn parse_seconds_as_ms(option: &'static str, value: &str) -> Result<u64, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        option,
        value: value.to_string(),
        reason: "expected a non-negative number of seconds",
    };
    let seconds: f64 = value.parse().map_err(|_| invalid())?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(invalid());
    }
    Ok((seconds * 1000.0 + 0.5) as u64)
}

impl core::fmt::Debug for SequenceOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequenceOptions")
            .field("orientation", &self.orientation)
            .field("center_focus", &self.center_focus)
            .field("scroll_snap", &self.scroll_snap)
            .field("auto_scroll", &self.auto_scroll)
            .field("auto_scroll_type", &self.auto_scroll_type)
            .field("auto_scroll_delay_ms", &self.auto_scroll_delay_ms)
            .field("auto_scroll_finish_action", &self.auto_scroll_finish_action)
            .field("paging_type", &self.paging_type)
            .field("paging_loop", &self.paging_loop)
            .field("key_scroll_type", &self.key_scroll_type)
            .field("key_scroll_loop", &self.key_scroll_loop)
            .field("use_key_scroll", &self.use_key_scroll)
            .field("smooth_scroll", &self.smooth_scroll)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("focus_on_click", &self.focus_on_click)
            .field("enable_click_events", &self.enable_click_events)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("lazy_loader", &self.lazy_loader.is_some())
            .field("lazy_load_type", &self.lazy_load_type)
            .field("lazy_load_threshold", &self.lazy_load_threshold)
            .finish()
    }
}
