use core::str::FromStr;

use crate::ConfigError;

/// Selects the active axis: width/x for horizontal sequences, height/y for vertical ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ConfigError::unknown_value("orientation", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    Previous,
    #[default]
    Next,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Self::Previous => Self::Next,
            Self::Next => Self::Previous,
        }
    }
}

/// Navigation granularity: one item at a time, or one container extent at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Granularity {
    PerPage,
    #[default]
    PerItem,
}

impl Granularity {
    pub(crate) fn parse(option: &'static str, s: &str) -> Result<Self, ConfigError> {
        match s {
            "per-page" => Ok(Self::PerPage),
            "per-item" => Ok(Self::PerItem),
            other => Err(ConfigError::unknown_value(option, other)),
        }
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("pagingType", s)
    }
}

/// Keyboard navigation mode.
///
/// - `PerPage` moves one container extent per key press.
/// - `PerItem` moves a keyboard cursor through the key-scroll links without moving focus.
/// - `PerItemAndFocus` moves the cursor and lets focus follow it while the two stay in step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KeyScrollType {
    PerPage,
    PerItem,
    #[default]
    PerItemAndFocus,
}

impl KeyScrollType {
    pub fn granularity(self) -> Granularity {
        match self {
            Self::PerPage => Granularity::PerPage,
            Self::PerItem | Self::PerItemAndFocus => Granularity::PerItem,
        }
    }
}

impl FromStr for KeyScrollType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-page" => Ok(Self::PerPage),
            "per-item" => Ok(Self::PerItem),
            "per-item-and-focus" => Ok(Self::PerItemAndFocus),
            other => Err(ConfigError::unknown_value("keyScrollType", other)),
        }
    }
}

/// What autoscroll does when it runs out of items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FinishAction {
    #[default]
    Reverse,
    Rewind,
}

impl FromStr for FinishAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse" => Ok(Self::Reverse),
            "rewind" => Ok(Self::Rewind),
            other => Err(ConfigError::unknown_value("autoScrollFinishAction", other)),
        }
    }
}

/// Unit of the lazy-load lookahead threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LazyLoadType {
    Page,
    #[default]
    Item,
}

impl FromStr for LazyLoadType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "item" => Ok(Self::Item),
            other => Err(ConfigError::unknown_value("lazyLoadType", other)),
        }
    }
}

/// The source of a relative navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NavigationKind {
    Paging,
    Keyboard,
    AutoScroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationTrigger {
    pub kind: NavigationKind,
    pub direction: Direction,
}

impl NavigationTrigger {
    pub fn new(kind: NavigationKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    pub fn paging(direction: Direction) -> Self {
        Self::new(NavigationKind::Paging, direction)
    }

    pub fn keyboard(direction: Direction) -> Self {
        Self::new(NavigationKind::Keyboard, direction)
    }
}

/// A measured two-dimensional size; the active axis is picked by [`Orientation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn extent(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Enabled state of the previous/next paging buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingButtons {
    pub previous: bool,
    pub next: bool,
}

impl PagingButtons {
    pub fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.previous,
            Direction::Next => self.next,
        }
    }
}

impl Default for PagingButtons {
    fn default() -> Self {
        Self {
            previous: true,
            next: true,
        }
    }
}

/// Generation id of a requested scroll transition.
///
/// Only the most recently requested transition is live; completing any older id is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionId(pub(crate) u64);

/// Generation id of an armed autoscroll timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub(crate) u64);

/// The single pending autoscroll timer. The adapter owns the clock and turns this into a
/// deadline; when it elapses, call [`crate::Sequence::fire_autoscroll`] with `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScrollTimer {
    pub id: TimerId,
    pub delay_ms: u64,
}

/// The decision produced by a successful navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigation {
    /// The item the navigation resolved to.
    pub index: usize,
    /// Target scroll offset, already clamped to the scrollable range.
    pub offset: u64,
    pub transition: TransitionId,
    /// `true` when the holder should animate to `offset` over `duration_ms`; `false` to snap.
    pub animate: bool,
    pub duration_ms: u64,
    /// Whether the navigation moved focus to `index`.
    pub focused: bool,
    pub timer: Option<AutoScrollTimer>,
}

/// Result of clicking an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub navigation: Option<Navigation>,
    /// Whether the UI layer should let the click event propagate.
    pub propagate: bool,
}
