use crate::Point;

/// Default displacement (CSS px) at or above which a press/release pair is a drag.
pub const DEFAULT_CLICK_THRESHOLD: f64 = 6.0;

/// Outcome of a release observed by a [`ClickTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Release {
    /// Displacement below the threshold: navigate.
    Click,
    /// Displacement at or above the threshold: do nothing.
    Drag,
    /// No press was registered for this card.
    Ignored,
}

/// Returns `true` when the pointer moved strictly less than `threshold` between `down` and `up`.
pub fn is_click(down: Point, up: Point, threshold: f64) -> bool {
    down.distance_squared(up) < threshold * threshold
}

/// Tells a click on a card apart from a drag that started on it.
///
/// Releases are usually observed window-wide (the pointer may leave the card), so every card's
/// tracker sees every release; only a tracker holding a press reacts to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTracker {
    threshold: f64,
    press: Option<Point>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_THRESHOLD)
    }
}

impl ClickTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            press: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn press(&mut self, at: Point) {
        self.press = Some(at);
    }

    /// Forgets a pending press without classifying it.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// Consumes the pending press, if any, and classifies the gesture.
    pub fn release(&mut self, at: Point) -> Release {
        let Some(down) = self.press.take() else {
            return Release::Ignored;
        };
        if is_click(down, at, self.threshold) {
            strace!(x = at.x, y = at.y, "ClickTracker: click");
            Release::Click
        } else {
            Release::Drag
        }
    }
}
