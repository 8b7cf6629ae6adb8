use std::cell::RefCell;
use std::rc::Rc;

use card_slider::DragScroll;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, MouseEvent, TouchEvent, Window};

use crate::DomOptions;
use crate::elements::set_scroll_left;
use crate::listen::{listen, on_mouse, on_touch, report};

struct DragScrollBinding {
    viewport: HtmlElement,
    dragging_class: String,
    state: RefCell<DragScroll>,
}

impl DragScrollBinding {
    /// Pointer x relative to the viewport's offset parent edge.
    fn local_x(&self, page_x: i32) -> f64 {
        f64::from(page_x - self.viewport.offset_left())
    }

    fn begin(&self, page_x: i32) {
        let x = self.local_x(page_x);
        let scroll = f64::from(self.viewport.scroll_left());
        self.state.borrow_mut().begin(x, scroll);
        report(
            "drag-scroll: add dragging class",
            self.viewport.class_list().add_1(&self.dragging_class),
        );
    }

    fn mouse_moved(&self, event: &MouseEvent) {
        let was_dragging = self.state.borrow().is_dragging();
        if !was_dragging {
            return;
        }
        let x = self.local_x(event.page_x());
        let next = self.state.borrow_mut().pointer_moved(x, event.buttons() != 0);
        match next {
            Some(offset) => {
                event.prevent_default();
                set_scroll_left(&self.viewport, offset);
            }
            None => self.clear_class(),
        }
    }

    fn touch_moved(&self, event: &TouchEvent) {
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        let next = self.state.borrow().drag_to(self.local_x(touch.page_x()));
        if let Some(offset) = next {
            set_scroll_left(&self.viewport, offset);
        }
    }

    fn end(&self) {
        self.state.borrow_mut().end();
        self.clear_class();
    }

    fn clear_class(&self) {
        report(
            "drag-scroll: remove dragging class",
            self.viewport.class_list().remove_1(&self.dragging_class),
        );
    }
}

/// Drag-to-scroll on the viewport for mouse and touch.
///
/// Releases are observed window-wide; leaving the viewport or losing window focus also ends the
/// drag.
pub(crate) fn install(
    window: &Window,
    viewport: &HtmlElement,
    options: &DomOptions,
) -> Result<(), JsValue> {
    let binding = Rc::new(DragScrollBinding {
        viewport: viewport.clone(),
        dragging_class: options.dragging_class.clone(),
        state: RefCell::new(options.slider.drag_scroll()),
    });

    let b = Rc::clone(&binding);
    on_mouse(viewport, "mousedown", move |event| {
        if event.button() == 0 {
            b.begin(event.page_x());
        }
    })?;

    let b = Rc::clone(&binding);
    on_mouse(window, "mousemove", move |event| b.mouse_moved(event))?;

    let b = Rc::clone(&binding);
    on_mouse(window, "mouseup", move |_| b.end())?;

    let b = Rc::clone(&binding);
    on_mouse(viewport, "mouseleave", move |_| b.end())?;

    let b = Rc::clone(&binding);
    listen(window, "blur", false, move |_| b.end())?;

    let b = Rc::clone(&binding);
    on_touch(viewport, "touchstart", move |event| {
        if let Some(touch) = event.touches().get(0) {
            b.begin(touch.page_x());
        }
    })?;

    let b = Rc::clone(&binding);
    on_touch(viewport, "touchmove", move |event| b.touch_moved(event))?;

    let b = binding;
    on_touch(window, "touchend", move |_| b.end())?;

    sdebug!("drag-scroll installed");
    Ok(())
}
