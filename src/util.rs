// Small DOM helpers shared by the components.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, TouchEvent, TouchList};

use crate::state::TouchPoint;

pub fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

/// The finger that was lifted, if the browser reported it.
pub fn lifted_point(e: &TouchEvent) -> Option<TouchPoint> {
    touch_points(&e.changed_touches()).into_iter().next()
}

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Lock or restore page scrolling behind the lightbox.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("story: could not update body overflow");
    }
}

/// DOM event listener removed again on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("story: could not listen for `{kind}`");
        }
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
