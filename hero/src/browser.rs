//! Browser capabilities (feature `csr`).
//!
//! Viewport observation through `IntersectionObserver`, navigation through
//! `window.location`, and a `mount` helper for standalone pages.

use leptos::html::Section;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::capabilities::{Destination, Navigate, VisibilityLatch, VisibilityOptions};
use crate::components::Hero;
use crate::types::HeroOverrides;

/// Navigates the current window.
///
/// Anchors scroll into view, external URLs open in a new tab, internal
/// paths replace `location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn navigate(&self, destination: &str) {
        let Some(window) = web_sys::window() else {
            warn!(destination, "no window, dropping navigation");
            return;
        };
        match Destination::classify(destination) {
            Destination::Anchor(id) => {
                match window.document().and_then(|doc| doc.get_element_by_id(id)) {
                    Some(element) => element.scroll_into_view(),
                    None => {
                        if let Err(err) = window.location().set_hash(id) {
                            warn!(?err, id, "failed to set location hash");
                        }
                    }
                }
            }
            Destination::External(url) => {
                if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                    warn!(?err, url, "window.open failed");
                }
            }
            Destination::Internal(path) => {
                if let Err(err) = window.location().set_href(path) {
                    warn!(?err, path, "failed to set location href");
                }
            }
        }
    }
}

/// Fire `latch` once `target` is `options.threshold` visible.
///
/// If the browser has no `IntersectionObserver` the latch fires right away
/// so content is never stuck in its pre pose.
pub fn observe_visibility(
    target: NodeRef<Section>,
    options: VisibilityOptions,
    latch: VisibilityLatch,
) {
    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let seen = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if seen {
                    latch.fire();
                    if options.once {
                        observer.disconnect();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                // Lives as long as the observer; released on page unload.
                callback.forget();
            }
            Err(err) => {
                warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                latch.fire();
            }
        }
    });
}

/// Mount a hero with `overrides` as the page body.
pub fn mount(overrides: HeroOverrides) {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(move || view! { <Hero overrides=overrides /> });
}
