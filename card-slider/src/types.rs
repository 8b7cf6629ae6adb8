use alloc::format;
use alloc::string::String;

/// A pointer position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// Horizontal extent of an element in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// A snapshot of the viewport's horizontal scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset: f64,
    /// Full width of the scrollable content.
    pub scroll_width: f64,
    /// Visible width of the viewport.
    pub client_width: f64,
}

impl ScrollMetrics {
    pub const fn new(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset,
            scroll_width,
            client_width,
        }
    }

    /// The scrollable range; zero when the content does not overflow.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Scroll fraction in `[0, 1]`, or `0` when there is nothing to scroll.
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }
}

/// The scrubber handle's lateral offset and rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleTransform {
    pub offset: f64,
    pub rotation_deg: f64,
}

impl HandleTransform {
    pub const ZERO: Self = Self {
        offset: 0.0,
        rotation_deg: 0.0,
    };

    pub fn from_progress(progress: f64, max_offset: f64, full_turn_deg: f64) -> Self {
        Self {
            offset: progress * max_offset,
            rotation_deg: progress * full_turn_deg,
        }
    }

    /// Recovers the progress fraction from the handle offset.
    pub fn progress(&self, max_offset: f64) -> f64 {
        if max_offset <= 0.0 {
            0.0
        } else {
            self.offset / max_offset
        }
    }

    /// Renders the transform as a CSS `transform` value.
    pub fn to_css(&self) -> String {
        format!(
            "translateX({}px) rotate({}deg)",
            self.offset, self.rotation_deg
        )
    }
}

/// Per-card data read from markup. Missing attributes are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub category: Option<String>,
    pub url: Option<String>,
}

impl Card {
    pub fn new(category: Option<String>, url: Option<String>) -> Self {
        Self { category, url }
    }
}
