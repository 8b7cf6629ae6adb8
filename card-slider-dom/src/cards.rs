use std::cell::RefCell;
use std::rc::Rc;

use card_slider::{ClickTracker, Point, Release};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::listen::{on_mouse, on_touch};
use crate::{DomOptions, SliderElements};

struct CardLink {
    window: Window,
    url: Option<String>,
    target: Rc<str>,
    features: Rc<str>,
    tracker: RefCell<ClickTracker>,
}

impl CardLink {
    fn press(&self, x: i32, y: i32) {
        self.tracker
            .borrow_mut()
            .press(Point::new(f64::from(x), f64::from(y)));
    }

    fn release(&self, x: i32, y: i32) {
        let outcome = self
            .tracker
            .borrow_mut()
            .release(Point::new(f64::from(x), f64::from(y)));
        if outcome == Release::Click {
            self.open();
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn open(&self) {
        let Some(url) = self.url.as_deref() else {
            return;
        };
        sdebug!(url, "opening card link");
        if let Err(err) =
            self.window
                .open_with_url_and_target_and_features(url, &self.target, &self.features)
        {
            swarn!(url, ?err, "window.open failed");
        }
    }
}

/// Opens a card's URL in a new browsing context on click, but not at the end of a drag.
///
/// Each card tracks its own press; releases are observed window-wide because the pointer may be
/// released outside the card.
pub(crate) fn install(
    window: &Window,
    elements: &SliderElements,
    options: &DomOptions,
) -> Result<(), JsValue> {
    let target: Rc<str> = Rc::from(options.link_target.as_str());
    let features: Rc<str> = Rc::from(options.link_features.as_str());
    let cards = elements.card_data(&options.attributes);

    for (element, card) in elements.cards.iter().zip(cards) {
        let link = Rc::new(CardLink {
            window: window.clone(),
            url: card.url,
            target: Rc::clone(&target),
            features: Rc::clone(&features),
            tracker: RefCell::new(options.slider.click_tracker()),
        });
        install_card(window, element, link)?;
    }

    sdebug!(cards = elements.cards.len(), "card links installed");
    Ok(())
}

fn install_card(window: &Window, card: &HtmlElement, link: Rc<CardLink>) -> Result<(), JsValue> {
    let l = Rc::clone(&link);
    on_mouse(card, "mousedown", move |event| {
        if event.button() == 0 {
            l.press(event.client_x(), event.client_y());
        }
    })?;

    let l = Rc::clone(&link);
    on_mouse(window, "mouseup", move |event| {
        l.release(event.client_x(), event.client_y());
    })?;

    let l = Rc::clone(&link);
    on_touch(card, "touchstart", move |event| {
        if let Some(touch) = event.touches().get(0) {
            l.press(touch.client_x(), touch.client_y());
        }
    })?;

    let l = link;
    on_touch(window, "touchend", move |event| {
        match event.changed_touches().get(0) {
            Some(touch) => l.release(touch.client_x(), touch.client_y()),
            None => l.tracker.borrow_mut().cancel(),
        }
    })?;
    Ok(())
}
