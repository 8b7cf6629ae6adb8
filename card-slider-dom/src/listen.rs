use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

/// Installs `handler` for `kind` events on `target` for the lifetime of the page.
///
/// There is no teardown: the closure is handed to the JS side with `forget`.
pub(crate) fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Mouse listener; mouse handlers may call `prevent_default`, so they are never passive.
pub(crate) fn on_mouse(
    target: &EventTarget,
    kind: &str,
    mut handler: impl FnMut(&MouseEvent) + 'static,
) -> Result<(), JsValue> {
    listen(target, kind, false, move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            handler(event);
        }
    })
}

/// Passive touch listener; touch gestures never block native scrolling.
pub(crate) fn on_touch(
    target: &EventTarget,
    kind: &str,
    mut handler: impl FnMut(&TouchEvent) + 'static,
) -> Result<(), JsValue> {
    listen(target, kind, true, move |event| {
        if let Some(event) = event.dyn_ref::<TouchEvent>() {
            handler(event);
        }
    })
}

/// Runs `callback` on the next animation frame.
///
/// If no frame can be requested the callback runs synchronously, so coalesced work is never lost.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn request_frame(callback: impl FnOnce() + 'static) {
    let callback = Rc::new(RefCell::new(Some(callback)));
    let Some(window) = web_sys::window() else {
        run_once(&callback);
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let callback_for_cb = Rc::clone(&callback);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        run_once(&callback_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(err) => {
            swarn!(?err, "requestAnimationFrame failed; running inline");
            run_once(&callback);
        }
    }
}

fn run_once<F: FnOnce()>(slot: &Rc<RefCell<Option<F>>>) {
    let callback = slot.borrow_mut().take();
    if let Some(callback) = callback {
        callback();
    }
}

/// Logs a failed DOM call; handlers have nowhere to propagate errors to.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        swarn!(context, ?err, "DOM call failed");
    }
}
