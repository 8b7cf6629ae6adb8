//! Headless behaviors for a horizontally scrolling card slider.
//!
//! This crate holds the state and geometry behind four independent slider behaviors:
//! drag-to-scroll, category-chip navigation with active-card detection, a rotating scrubber
//! handle kept in sync with the scroll position, and click-vs-drag disambiguation for cards.
//!
//! It is UI-agnostic. An adapter (see the `card-slider-dom` crate) is expected to:
//! - report pointer/touch coordinates and scroll events
//! - provide geometry (element spans, scroll metrics, handle travel)
//! - apply what comes back (scroll offsets, handle transforms, chip state, navigation)
//! - schedule one animation frame whenever a `on_scroll` call returns `true`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod category;
mod click;
mod drag_scroll;
mod frame;
mod options;
mod scrubber;
mod types;

#[cfg(test)]
mod tests;

pub use category::{CategoryNav, ChipSet, center_scroll_target, closest_to_center};
pub use click::{ClickTracker, DEFAULT_CLICK_THRESHOLD, Release, is_click};
pub use drag_scroll::{DEFAULT_DRAG_SENSITIVITY, DragScroll};
pub use frame::FrameGate;
pub use options::SliderOptions;
pub use scrubber::{DEFAULT_FULL_TURN_DEG, ScrubUpdate, Scrubber, ScrubberMode, scroll_progress};
pub use types::{Card, HandleTransform, Point, ScrollMetrics, Span};
