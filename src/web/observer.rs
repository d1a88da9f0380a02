//! `IntersectionObserver` plumbing for the viewport watchers.

use super::WebError;
use crate::viewport::{Observation, ObserverOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub const CAPABILITY: &str = "IntersectionObserver";

pub fn supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(CAPABILITY)).unwrap_or(false)
}

/// Observe every target with one observer. `on_entry` gets each entry's
/// target and intersection state; returning [`Observation::Stop`]
/// unobserves that target.
///
/// The observer and its callback live for the rest of the page.
pub fn observe_all<F>(
    options: &ObserverOptions,
    targets: &[Element],
    mut on_entry: F,
) -> Result<usize, WebError>
where
    F: FnMut(&Element, bool) -> Observation + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if on_entry(&target, entry.is_intersecting()) == Observation::Stop {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(targets.len())
}
