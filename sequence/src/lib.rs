//! A headless carousel engine.
//!
//! For clock-driven adapter utilities (tween animator, timer deadlines, key bindings), see the
//! `sequence-adapter` crate.
//!
//! A sequence is a fixed-size container showing part of a holder in which items are laid end
//! to end. This crate holds the navigation logic: the three independent link orderings per item
//! (autoscroll, paging buttons, keyboard), scroll offsets with centering and snapping, the
//! autoscroll direction reversal, and per-trigger dispatch.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - item and container measurements (via [`ItemMeasurer`])
//! - a way to snap or animate the holder to an offset
//! - a clock for the autoscroll timer
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod item;
mod lookahead;
mod measure;
mod offset;
mod options;
mod sequence;
mod state;
mod types;


pub use error::ConfigError;
pub use item::{Item, LinkSet, Links};
pub use lookahead::{LazyLoadSink, threshold_pixels};
pub use measure::{ItemMeasurer, StripLayout};
pub use offset::OffsetModel;
pub use options::{FocusCallback, LazyLoader, SequenceOptions};
pub use sequence::Sequence;
pub use state::SequenceSnapshot;
pub use types::{
    AutoScrollTimer, ClickOutcome, Direction, FinishAction, Granularity, KeyScrollType,
    LazyLoadType, Navigation, NavigationKind, NavigationTrigger, Orientation, PagingButtons,
    Size, TimerId, TransitionId,
};
