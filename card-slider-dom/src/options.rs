use card_slider::SliderOptions;

/// CSS selectors used to find the slider markup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub viewport: String,
    pub track: String,
    pub card: String,
    pub chip: String,
    pub scrubber_track: String,
    pub scrubber_handle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            viewport: ".slider-viewport".into(),
            track: ".slider-track".into(),
            card: ".slider-card".into(),
            chip: "[data-category-chip]".into(),
            scrubber_track: ".scrubber-track".into(),
            scrubber_handle: ".scrubber-handle".into(),
        }
    }
}

/// Attribute names read from cards and chips.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    pub chip_category: String,
    pub card_category: String,
    pub card_url: String,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            chip_category: "data-category-chip".into(),
            card_category: "data-category".into(),
            card_url: "data-url".into(),
        }
    }
}

/// Configuration for [`crate::attach`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomOptions {
    pub selectors: Selectors,
    pub attributes: Attributes,
    /// Class set on the viewport and on the scrubber handle while they are dragged.
    pub dragging_class: String,
    /// Class set on the active category chip.
    pub active_class: String,
    /// Window target for card navigation.
    pub link_target: String,
    /// Window features for card navigation.
    pub link_features: String,
    pub slider: SliderOptions,
}

impl Default for DomOptions {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            attributes: Attributes::default(),
            dragging_class: "is-dragging".into(),
            active_class: "is-active".into(),
            link_target: "_blank".into(),
            link_features: "noopener,noreferrer".into(),
            slider: SliderOptions::default(),
        }
    }
}

impl DomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_dragging_class(mut self, class: impl Into<String>) -> Self {
        self.dragging_class = class.into();
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn with_slider(mut self, slider: SliderOptions) -> Self {
        self.slider = slider;
        self
    }
}
