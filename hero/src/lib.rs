//! # hero-leptos
//!
//! Landing-page hero section for Leptos 0.8.
//!
//! The hero renders a badge, a two-part headline, a subtitle, three feature
//! pills, a floating illustration, two call-to-action buttons and a
//! "trusted by" strip. All copy comes from a [`types::HeroConfig`] resolved
//! from caller overrides on each render, and every block enters the page
//! on a staggered timeline once the section becomes visible.
//!
//! ## Features
//!
//! - **Presence-based overrides**: set only what differs, `""` and `false` included
//! - **Timeline as data**: entrance poses, durations and delays live in [`timeline`]
//! - **Injected capabilities**: navigation and visibility are passed in, see [`capabilities`]
//! - **SSR and CSR**: render static HTML (feature `ssr`, default) or mount in the
//!   browser with a real `IntersectionObserver` (feature `csr`)
//!
//! ## Quick Start
//!
//! ```rust
//! use hero_leptos::{render_page, RenderOptions, types::HeroOverrides};
//!
//! let overrides = HeroOverrides {
//!     title: Some("Warehouse robots".into()),
//!     ..Default::default()
//! };
//!
//! let html = render_page(&overrides, &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Warehouse robots"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - configuration, overrides and the merge
//! - [`timeline`] - entrance timeline, float loop, CTA pointer scaling
//! - [`capabilities`] - navigation and one-shot visibility
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and page script for the standalone page
//! - [`error`] - errors from loading overrides
//!
//! ## Editing hooks
//!
//! Every text element carries `data-editable="<key>"` with the camelCase
//! config key, and both CTAs carry `data-editable-href` plus `data-href`,
//! so external content tooling can find and rewrite them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(feature = "csr")]
pub mod browser;
pub mod capabilities;
pub mod components;
pub mod error;
pub mod styles;
pub mod timeline;
pub mod types;

pub use error::HeroError;

#[cfg(feature = "ssr")]
use capabilities::VisibilityLatch;
#[cfg(feature = "ssr")]
use components::{Hero, HeroDocument};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::reactive::owner::Owner;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use tracing::debug;
#[cfg(feature = "ssr")]
use types::HeroOverrides;

/// Options for static rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render every gated block in its settled pose instead of waiting for
    /// the section to scroll into view.
    pub revealed: bool,
}

/// Render the hero section as an HTML fragment.
///
/// # Example
///
/// ```rust
/// use hero_leptos::{render_hero, RenderOptions, types::HeroOverrides};
///
/// let html = render_hero(&HeroOverrides::default(), &RenderOptions { revealed: true });
/// assert!(html.contains(r#"id="hero""#));
/// assert!(html.contains("opacity: 1;"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_hero(overrides: &HeroOverrides, options: &RenderOptions) -> String {
    debug!(revealed = options.revealed, "rendering hero fragment");
    // Signals created while rendering belong to this owner and are
    // disposed with it.
    let owner = Owner::new();
    owner.with(|| {
        let visibility = VisibilityLatch::new();
        if options.revealed {
            visibility.fire();
        }
        view! { <Hero overrides=overrides.clone() visibility=visibility /> }.to_html()
    })
}

/// Render a standalone HTML page containing only the hero.
///
/// The page inlines its CSS and a small script that reveals the hero when
/// it scrolls into view, scales the CTAs on hover/press and sends CTA clicks
/// to their `data-href` destination.
#[cfg(feature = "ssr")]
pub fn render_page(overrides: &HeroOverrides, options: &RenderOptions) -> String {
    debug!(revealed = options.revealed, "rendering hero page");
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <HeroDocument overrides=overrides.clone() revealed=options.revealed /> }
            .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
