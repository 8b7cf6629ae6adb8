use std::cell::RefCell;
use std::rc::Rc;

use card_slider::{HandleTransform, Scrubber};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::DomOptions;
use crate::elements::{ScrubberElements, scroll_metrics, set_scroll_left};
use crate::listen::{listen, on_mouse, on_touch, report, request_frame};

struct ScrubberBinding {
    viewport: HtmlElement,
    parts: ScrubberElements,
    dragging_class: String,
    state: RefCell<Scrubber>,
}

impl ScrubberBinding {
    fn apply(&self, transform: HandleTransform) {
        report(
            "scrubber: set handle transform",
            self.parts
                .handle
                .style()
                .set_property("transform", &transform.to_css()),
        );
    }

    fn sync_now(&self) {
        let transform = self
            .state
            .borrow_mut()
            .sync_to_scroll(scroll_metrics(&self.viewport), self.parts.max_offset());
        self.apply(transform);
    }

    fn sync_frame(&self) {
        let next = self
            .state
            .borrow_mut()
            .on_frame(scroll_metrics(&self.viewport), self.parts.max_offset());
        if let Some(transform) = next {
            self.apply(transform);
        }
    }

    fn resized(&self) {
        let next = self
            .state
            .borrow_mut()
            .on_resize(scroll_metrics(&self.viewport), self.parts.max_offset());
        if let Some(transform) = next {
            self.apply(transform);
        }
    }

    fn is_dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }

    fn begin(&self, client_x: i32) {
        self.state.borrow_mut().begin_drag(f64::from(client_x));
        report(
            "scrubber: add dragging class",
            self.parts.handle.class_list().add_1(&self.dragging_class),
        );
    }

    fn drag(&self, client_x: i32) {
        let update = self.state.borrow_mut().drag_to(
            f64::from(client_x),
            scroll_metrics(&self.viewport),
            self.parts.max_offset(),
        );
        if let Some(update) = update {
            set_scroll_left(&self.viewport, update.scroll_offset);
            self.apply(update.transform);
        }
    }

    fn end(&self) {
        if self.state.borrow_mut().end_drag() {
            report(
                "scrubber: remove dragging class",
                self.parts.handle.class_list().remove_1(&self.dragging_class),
            );
        }
    }
}

/// Two-way sync between the viewport scroll and the scrubber handle.
pub(crate) fn install(
    window: &Window,
    viewport: &HtmlElement,
    parts: &ScrubberElements,
    options: &DomOptions,
) -> Result<(), JsValue> {
    let binding = Rc::new(ScrubberBinding {
        viewport: viewport.clone(),
        parts: parts.clone(),
        dragging_class: options.dragging_class.clone(),
        state: RefCell::new(options.slider.scrubber()),
    });
    binding.sync_now();

    let b = Rc::clone(&binding);
    listen(viewport, "scroll", true, move |_| {
        if !b.state.borrow_mut().on_scroll() {
            return;
        }
        let frame = Rc::clone(&b);
        request_frame(move || frame.sync_frame());
    })?;

    let b = Rc::clone(&binding);
    on_mouse(&parts.handle, "mousedown", move |event| {
        if event.button() != 0 {
            return;
        }
        event.prevent_default();
        b.begin(event.client_x());
    })?;

    let b = Rc::clone(&binding);
    on_mouse(window, "mousemove", move |event| {
        if !b.is_dragging() {
            return;
        }
        event.prevent_default();
        b.drag(event.client_x());
    })?;

    let b = Rc::clone(&binding);
    on_mouse(window, "mouseup", move |_| b.end())?;

    let b = Rc::clone(&binding);
    on_touch(&parts.handle, "touchstart", move |event| {
        if let Some(touch) = event.touches().get(0) {
            b.begin(touch.client_x());
        }
    })?;

    let b = Rc::clone(&binding);
    on_touch(window, "touchmove", move |event| {
        if !b.is_dragging() {
            return;
        }
        if let Some(touch) = event.touches().get(0) {
            b.drag(touch.client_x());
        }
    })?;

    let b = Rc::clone(&binding);
    on_touch(window, "touchend", move |_| b.end())?;

    let b = binding;
    listen(window, "resize", true, move |_| b.resized())?;

    sdebug!("scrubber installed");
    Ok(())
}
