use card_slider::{Card, ScrollMetrics, Span};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::{Attributes, Selectors};

/// The slider markup found in a document.
///
/// The viewport, track and at least one card are required. Chips and the scrubber pair are
/// optional; the behaviors that need them stay inactive when they are absent.
#[derive(Clone, Debug)]
pub struct SliderElements {
    pub viewport: HtmlElement,
    pub track: HtmlElement,
    pub cards: Vec<HtmlElement>,
    pub chips: Vec<HtmlElement>,
    pub scrubber: Option<ScrubberElements>,
}

#[derive(Clone, Debug)]
pub struct ScrubberElements {
    pub track: HtmlElement,
    pub handle: HtmlElement,
}

impl SliderElements {
    /// Looks up the slider markup. Returns `None` when a required element is missing.
    pub fn query(document: &Document, selectors: &Selectors) -> Option<Self> {
        let viewport = query_one(document, &selectors.viewport)?;
        let track = query_one(document, &selectors.track)?;
        let cards = query_all(document, &selectors.card);
        if cards.is_empty() {
            sdebug!(selector = %selectors.card, "no cards; slider left inactive");
            return None;
        }
        let chips = query_all(document, &selectors.chip);

        let scrubber = match (
            query_one(document, &selectors.scrubber_track),
            query_one(document, &selectors.scrubber_handle),
        ) {
            (Some(track), Some(handle)) => Some(ScrubberElements { track, handle }),
            _ => {
                sdebug!("scrubber markup incomplete; scrubber left inactive");
                None
            }
        };

        Some(Self {
            viewport,
            track,
            cards,
            chips,
            scrubber,
        })
    }

    /// Reads each card's category and destination URL.
    pub fn card_data(&self, attributes: &Attributes) -> Vec<Card> {
        self.cards
            .iter()
            .map(|card| {
                Card::new(
                    non_empty_attribute(card, &attributes.card_category),
                    non_empty_attribute(card, &attributes.card_url),
                )
            })
            .collect()
    }

    pub fn chip_categories(&self, attributes: &Attributes) -> Vec<Option<String>> {
        self.chips
            .iter()
            .map(|chip| non_empty_attribute(chip, &attributes.chip_category))
            .collect()
    }
}

impl ScrubberElements {
    /// Free travel of the handle along its track.
    pub fn max_offset(&self) -> f64 {
        span_of(&self.track).width - span_of(&self.handle).width
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(Some(element)) => element.dyn_into::<HtmlElement>().ok(),
        Ok(None) => {
            sdebug!(selector, "element not found");
            None
        }
        Err(err) => {
            swarn!(selector, ?err, "invalid selector");
            None
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            swarn!(selector, ?err, "invalid selector");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attribute value, treating an absent or empty attribute as "feature absent".
pub(crate) fn non_empty_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name).filter(|v| !v.is_empty())
}

/// Horizontal extent of `element` in client coordinates.
pub(crate) fn span_of(element: &Element) -> Span {
    let rect = element.get_bounding_client_rect();
    Span::new(rect.left(), rect.width())
}

pub(crate) fn scroll_metrics(viewport: &Element) -> ScrollMetrics {
    ScrollMetrics::new(
        f64::from(viewport.scroll_left()),
        f64::from(viewport.scroll_width()),
        f64::from(viewport.client_width()),
    )
}

pub(crate) fn set_scroll_left(viewport: &Element, offset: f64) {
    viewport.set_scroll_left(offset.round() as i32);
}
