use std::cell::RefCell;
use std::rc::Rc;

use card_slider::{CategoryNav, center_scroll_target};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::elements::span_of;
use crate::listen::{listen, report, request_frame};
use crate::{DomOptions, SliderElements};

struct CategoryBinding {
    viewport: HtmlElement,
    cards: Vec<HtmlElement>,
    chips: Vec<HtmlElement>,
    active_class: String,
    nav: RefCell<CategoryNav>,
}

impl CategoryBinding {
    fn chip_clicked(&self, index: usize) {
        let target = self.nav.borrow_mut().chip_clicked(index);
        let Some(card) = target.and_then(|i| self.cards.get(i)) else {
            return;
        };
        self.center_card(card);
        self.render_chips();
    }

    /// Smooth-scrolls the viewport so `card` sits in the middle.
    fn center_card(&self, card: &HtmlElement) {
        let left = center_scroll_target(
            span_of(card),
            span_of(&self.viewport),
            f64::from(self.viewport.scroll_left()),
        );
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        self.viewport.scroll_to_with_scroll_to_options(&options);
    }

    fn detect_active(&self) {
        let centers: Vec<f64> = self
            .cards
            .iter()
            .map(|card| span_of(card).center())
            .collect();
        let viewport_center = span_of(&self.viewport).center();
        let changed = self.nav.borrow_mut().on_frame(centers, viewport_center);
        if changed {
            self.render_chips();
        }
    }

    fn render_chips(&self) {
        let nav = self.nav.borrow();
        for (index, chip) in self.chips.iter().enumerate() {
            let result = chip
                .class_list()
                .toggle_with_force(&self.active_class, nav.chips().is_active(index))
                .map(|_| ());
            report("category: toggle active class", result);
        }
    }
}

/// Chip navigation plus scroll-driven active-chip detection.
///
/// Chip-less layouts are supported: nothing is installed when there are no chips.
pub(crate) fn install(elements: &SliderElements, options: &DomOptions) -> Result<(), JsValue> {
    if elements.chips.is_empty() {
        sdebug!("no category chips; category navigation inactive");
        return Ok(());
    }

    let card_categories = elements
        .card_data(&options.attributes)
        .into_iter()
        .map(|card| card.category);
    let nav = CategoryNav::new(card_categories, elements.chip_categories(&options.attributes));

    let binding = Rc::new(CategoryBinding {
        viewport: elements.viewport.clone(),
        cards: elements.cards.clone(),
        chips: elements.chips.clone(),
        active_class: options.active_class.clone(),
        nav: RefCell::new(nav),
    });

    for (index, chip) in elements.chips.iter().enumerate() {
        let b = Rc::clone(&binding);
        listen(chip, "click", false, move |_| b.chip_clicked(index))?;
    }

    let b = binding;
    listen(&elements.viewport, "scroll", true, move |_| {
        if !b.nav.borrow_mut().on_scroll() {
            return;
        }
        let frame = Rc::clone(&b);
        request_frame(move || frame.detect_active());
    })?;

    sdebug!(chips = elements.chips.len(), "category navigation installed");
    Ok(())
}
