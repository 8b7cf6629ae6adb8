use alloc::string::String;
use alloc::vec::Vec;

use crate::{FrameGate, Span};

fn distance(a: f64, b: f64) -> f64 {
    let d = a - b;
    if d.is_sign_negative() { -d } else { d }
}

/// Index of the center closest to `viewport_center`.
///
/// Ties keep the first (document-order) candidate. `NaN` centers are skipped.
pub fn closest_to_center(
    centers: impl IntoIterator<Item = f64>,
    viewport_center: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, center) in centers.into_iter().enumerate() {
        let d = distance(center, viewport_center);
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}

/// Scroll offset that puts the card's horizontal center on the viewport's center.
///
/// Both spans are in client coordinates, as read while the viewport sits at `scroll_offset`.
pub fn center_scroll_target(card: Span, viewport: Span, scroll_offset: f64) -> f64 {
    scroll_offset + (card.center() - viewport.center())
}

/// Category chips with mutually exclusive active state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChipSet {
    categories: Vec<Option<String>>,
    active: Option<usize>,
}

impl ChipSet {
    pub fn new(categories: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get(index)?.as_deref()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Makes `index` the only active chip. Returns whether the active chip changed.
    pub fn activate_chip(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.set_active(Some(index))
    }

    /// Activates the first chip carrying `category`, clearing the rest.
    ///
    /// When no chip carries it, every chip ends up inactive. Returns whether the active chip
    /// changed.
    pub fn activate_category(&mut self, category: &str) -> bool {
        let next = self
            .categories
            .iter()
            .position(|c| c.as_deref() == Some(category));
        self.set_active(next)
    }

    pub fn clear(&mut self) -> bool {
        self.set_active(None)
    }

    fn set_active(&mut self, next: Option<usize>) -> bool {
        if self.active == next {
            return false;
        }
        strace!(prev = ?self.active, next = ?next, "ChipSet: active chip changed");
        self.active = next;
        true
    }
}

/// Chip-driven navigation plus scroll-driven active-chip detection.
///
/// With no chips every operation is a no-op, so chip-less layouts need no special casing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryNav {
    cards: Vec<Option<String>>,
    chips: ChipSet,
    frame: FrameGate,
}

impl CategoryNav {
    pub fn new(
        card_categories: impl IntoIterator<Item = Option<String>>,
        chip_categories: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        let nav = Self {
            cards: card_categories.into_iter().collect(),
            chips: ChipSet::new(chip_categories),
            frame: FrameGate::new(),
        };
        sdebug!(
            cards = nav.cards.len(),
            chips = nav.chips.len(),
            "CategoryNav::new"
        );
        nav
    }

    pub fn chips(&self) -> &ChipSet {
        &self.chips
    }

    pub fn is_enabled(&self) -> bool {
        !self.chips.is_empty()
    }

    /// Index of the first card labelled `category`.
    pub fn first_card_in(&self, category: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.as_deref() == Some(category))
    }

    /// Handles a click on chip `index`.
    ///
    /// Returns the card to center, and activates the chip, only when a card matches the chip's
    /// category. Otherwise nothing changes.
    pub fn chip_clicked(&mut self, index: usize) -> Option<usize> {
        let category = self.chips.category(index)?;
        let card = self.first_card_in(category)?;
        self.chips.activate_chip(index);
        Some(card)
    }

    /// Called for every viewport scroll event. Returns `true` when a frame must be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.frame.request()
    }

    /// Runs the scheduled detection: the card closest to the viewport center decides the active
    /// chip. Returns whether the active chip changed.
    pub fn on_frame(
        &mut self,
        card_centers: impl IntoIterator<Item = f64>,
        viewport_center: f64,
    ) -> bool {
        self.frame.complete();
        if !self.is_enabled() {
            return false;
        }
        let Some(index) = closest_to_center(card_centers, viewport_center) else {
            return false;
        };
        match self.cards.get(index).and_then(|c| c.as_deref()) {
            Some(category) => self.chips.activate_category(category),
            None => false,
        }
    }
}
