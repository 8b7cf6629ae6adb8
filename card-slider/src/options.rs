use crate::{
    ClickTracker, DEFAULT_CLICK_THRESHOLD, DEFAULT_DRAG_SENSITIVITY, DEFAULT_FULL_TURN_DEG,
    DragScroll, Scrubber,
};

/// Tunables shared by the slider behaviors.
///
/// The defaults reproduce the stock slider: 1.1x drag speed, a 6px click threshold and one full
/// handle turn across the scrubber track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    /// Multiplier applied to pointer travel while drag-scrolling the viewport.
    pub drag_sensitivity: f64,
    /// Pointer displacement (px) at or above which a card press is treated as a drag.
    pub click_threshold: f64,
    /// Handle rotation (degrees) at the end of the scrubber track.
    pub full_turn_deg: f64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            full_turn_deg: DEFAULT_FULL_TURN_DEG,
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag_sensitivity(mut self, drag_sensitivity: f64) -> Self {
        self.drag_sensitivity = drag_sensitivity;
        self
    }

    pub fn with_click_threshold(mut self, click_threshold: f64) -> Self {
        self.click_threshold = click_threshold;
        self
    }

    pub fn with_full_turn_deg(mut self, full_turn_deg: f64) -> Self {
        self.full_turn_deg = full_turn_deg;
        self
    }

    pub fn drag_scroll(&self) -> DragScroll {
        DragScroll::new(self.drag_sensitivity)
    }

    pub fn click_tracker(&self) -> ClickTracker {
        ClickTracker::new(self.click_threshold)
    }

    pub fn scrubber(&self) -> Scrubber {
        Scrubber::new(self.full_turn_deg)
    }
}
