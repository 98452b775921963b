//! Boundary capabilities injected into the hero.
//!
//! The hero never navigates or watches the viewport itself. It is handed:
//!
//! - a [`Navigate`] implementation, called with the CTA destination on click;
//! - a [`VisibilityLatch`], a one-shot boolean flipped by whatever observes
//!   the section (an `IntersectionObserver` in the browser, a test, or the
//!   SSR renderer when asked for a pre-revealed page).
//!
//! Both default sensibly: [`default_navigator`] picks the browser navigator
//! under `csr` and a logging one otherwise, and [`use_visibility`] wires the
//! observer when running in the browser.

use std::fmt;
use std::sync::Arc;

use leptos::html::Section;
use leptos::prelude::*;
use tracing::{debug, info};

use crate::types::HeroConfig;

/// Fraction of the section that must be on screen before the reveal.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Performs navigation for a destination string.
pub trait Navigate: Send + Sync {
    /// Navigate to `destination`. Fire-and-forget.
    fn navigate(&self, destination: &str);
}

/// Kind of destination a CTA points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// `#id` on the current page; holds the id without `#`
    Anchor(&'a str),
    /// Absolute URL or `mailto:`; opened in a new tab
    External(&'a str),
    /// Path inside the site
    Internal(&'a str),
}

impl<'a> Destination<'a> {
    /// Classify a raw destination string.
    pub fn classify(raw: &'a str) -> Destination<'a> {
        if let Some(id) = raw.strip_prefix('#') {
            Destination::Anchor(id)
        } else if raw.starts_with("http://")
            || raw.starts_with("https://")
            || raw.starts_with("//")
            || raw.starts_with("mailto:")
        {
            Destination::External(raw)
        } else {
            Destination::Internal(raw)
        }
    }
}

/// Navigator that only records the dispatch in the log. Used for SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNavigator;

impl Navigate for TracingNavigator {
    fn navigate(&self, destination: &str) {
        info!(?destination, kind = ?Destination::classify(destination), "navigate");
    }
}

/// Navigator used when the caller does not inject one.
pub fn default_navigator() -> Arc<dyn Navigate> {
    #[cfg(feature = "csr")]
    {
        Arc::new(crate::browser::BrowserNavigator)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(TracingNavigator)
    }
}

/// Click behaviour of one CTA: a destination bound to a navigator.
#[derive(Clone)]
pub struct CtaAction {
    destination: String,
    navigator: Arc<dyn Navigate>,
}

impl CtaAction {
    /// Bind `destination` to `navigator`.
    pub fn new(destination: impl Into<String>, navigator: Arc<dyn Navigate>) -> Self {
        Self {
            destination: destination.into(),
            navigator,
        }
    }

    /// Primary and secondary actions for a resolved config.
    pub fn pair(config: &HeroConfig, navigator: Arc<dyn Navigate>) -> (CtaAction, CtaAction) {
        (
            CtaAction::new(config.primary_cta_href.clone(), Arc::clone(&navigator)),
            CtaAction::new(config.secondary_cta_href.clone(), navigator),
        )
    }

    /// Where this CTA goes.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Dispatch the navigation once.
    pub fn trigger(&self) {
        debug!(destination = %self.destination, "cta clicked");
        self.navigator.navigate(&self.destination);
    }
}

impl fmt::Debug for CtaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtaAction")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

/// How the section is observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Visible fraction that counts as "seen"
    pub threshold: f64,
    /// Stop observing after the first hit
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            once: true,
        }
    }
}

/// One-shot visibility flag: false until fired, then true forever.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityLatch(RwSignal<bool>);

impl VisibilityLatch {
    /// A latch that has not fired.
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Mark the section as seen. Returns `true` only for the call that
    /// actually flipped the latch.
    pub fn fire(&self) -> bool {
        if self.0.get_untracked() {
            return false;
        }
        self.0.set(true);
        debug!("hero visible, starting entrance timeline");
        true
    }

    /// Current state; tracked, so closures reading it re-run on fire.
    pub fn is_visible(&self) -> bool {
        self.0.get()
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Latch fired when `target` crosses `options.threshold` in the viewport.
///
/// Without `csr` there is no viewport, so the latch stays unfired and the
/// caller decides when (or whether) to fire it.
pub fn use_visibility(target: NodeRef<Section>, options: VisibilityOptions) -> VisibilityLatch {
    let latch = VisibilityLatch::new();
    #[cfg(feature = "csr")]
    crate::browser::observe_visibility(target, options, latch);
    #[cfg(not(feature = "csr"))]
    let _ = (target, options);
    latch
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Navigator that remembers every destination it was asked for.
    #[derive(Default)]
    struct RecordingNavigator {
        visits: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn visits(&self) -> Vec<String> {
            self.visits.lock().unwrap().clone()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, destination: &str) {
            self.visits.lock().unwrap().push(destination.to_string());
        }
    }

    #[test]
    fn primary_cta_navigates_once() {
        let recorder = Arc::new(RecordingNavigator::default());
        let config = HeroConfig {
            primary_cta_href: "/solutions".into(),
            ..Default::default()
        };
        let (primary, _secondary) = CtaAction::pair(&config, recorder.clone());

        primary.trigger();

        assert_eq!(recorder.visits(), vec!["/solutions".to_string()]);
    }

    #[test]
    fn each_cta_uses_its_own_destination() {
        let recorder = Arc::new(RecordingNavigator::default());
        let config = HeroConfig::default();
        let (primary, secondary) = CtaAction::pair(&config, recorder.clone());

        secondary.trigger();
        primary.trigger();

        assert_eq!(primary.destination(), "/solutions");
        assert_eq!(secondary.destination(), "/demo");
        assert_eq!(recorder.visits(), vec!["/demo".to_string(), "/solutions".to_string()]);
    }

    #[test]
    fn destinations_are_classified() {
        assert_eq!(Destination::classify("#contact"), Destination::Anchor("contact"));
        assert_eq!(Destination::classify("/solutions"), Destination::Internal("/solutions"));
        assert_eq!(Destination::classify("demo"), Destination::Internal("demo"));
        assert_eq!(Destination::classify(""), Destination::Internal(""));
        assert_eq!(
            Destination::classify("https://example.com"),
            Destination::External("https://example.com")
        );
        assert_eq!(
            Destination::classify("mailto:sales@example.com"),
            Destination::External("mailto:sales@example.com")
        );
        assert_eq!(
            Destination::classify("//cdn.example.com/x"),
            Destination::External("//cdn.example.com/x")
        );
    }

    #[test]
    fn latch_is_one_shot() {
        let latch = VisibilityLatch::new();
        assert!(!latch.is_visible());

        assert!(latch.fire());
        assert!(latch.is_visible());

        assert!(!latch.fire());
        assert!(latch.is_visible());
    }

    #[test]
    fn default_visibility_options() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert!(options.once);
    }

    #[test]
    fn ssr_visibility_stays_unfired() {
        let latch = use_visibility(NodeRef::new(), VisibilityOptions::default());
        assert!(!latch.is_visible());
    }
}
