//! Adapter utilities for the `sequence` crate.
//!
//! The `sequence` crate is UI-agnostic and clock-agnostic: it decides where the holder should
//! go and hands out timer and transition ids. This crate provides small, framework-neutral
//! helpers commonly needed by adapters:
//!
//! - Tween-based offset animation ([`TweenAnimator`], or your own [`OffsetAnimator`])
//! - A [`Controller`] that owns the clock, the displayed offset and the autoscroll deadline
//! - Arrow key mapping for horizontal and vertical sequences
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controller;
mod key;
mod tween;

#[cfg(test)]
mod tests;

pub use animator::{AnimationFrame, OffsetAnimator, TweenAnimator};
pub use controller::Controller;
pub use key::{ArrowKey, key_direction};
pub use tween::{Easing, Tween};
