//! Browser bindings for the `card-slider` crate.
//!
//! `card-slider` holds the slider state and geometry; this crate binds it to page markup:
//!
//! - finds the viewport, track, cards, chips and scrubber pair ([`SliderElements`])
//! - installs page-lifetime listeners for each behavior
//! - coalesces scroll work into animation frames
//! - opens card links in a new browsing context
//!
//! Every behavior checks for its own elements and stays inactive when they are missing, so one
//! script serves page variants with or without chips or a scrubber.

#[macro_use]
mod macros;

mod cards;
mod category;
mod drag;
mod elements;
mod listen;
mod options;
mod scrubber;


pub use card_slider;
pub use elements::{ScrubberElements, SliderElements};
pub use options::{Attributes, DomOptions, Selectors};

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Attaches all slider behaviors to the markup in `document`.
///
/// Returns `false` when the required markup (viewport, track, cards) is missing, in which case
/// nothing is installed. Optional parts that are missing only disable their own behavior.
pub fn attach(document: &Document, options: &DomOptions) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(elements) = SliderElements::query(document, &options.selectors) else {
        sdebug!("slider markup not found; nothing attached");
        return false;
    };

    installed(
        "drag-scroll",
        drag::install(&window, &elements.viewport, options),
    );
    installed("category", category::install(&elements, options));
    if let Some(parts) = &elements.scrubber {
        installed(
            "scrubber",
            scrubber::install(&window, &elements.viewport, parts, options),
        );
    }
    installed("cards", cards::install(&window, &elements, options));
    true
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn installed(behavior: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        swarn!(behavior, ?err, "failed to install behavior");
    }
}

/// Module entry point: attaches with default options once the document is parsed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    if document.ready_state() != "loading" {
        attach(&document, &DomOptions::default());
        return Ok(());
    }
    let target = document.clone();
    listen::listen(&document, "DOMContentLoaded", false, move |_| {
        attach(&target, &DomOptions::default());
    })
}
