//! Standalone HTML page around the hero.

use leptos::prelude::*;

use super::Hero;
use crate::capabilities::VisibilityLatch;
use crate::styles::{page_script, HERO_CSS};
use crate::types::{resolve, HeroConfig, HeroOverrides};

/// Complete document: head with CSS, the hero, and the page script.
///
/// With `revealed` the entrance latch is fired before rendering, so every
/// block is emitted in its settled pose and the script skips the observer.
#[component]
pub fn HeroDocument(
    overrides: HeroOverrides,
    #[prop(default = false)]
    revealed: bool,
) -> impl IntoView {
    let page_title = resolve(&HeroConfig::default(), &overrides).title;
    let visibility = VisibilityLatch::new();
    if revealed {
        visibility.fire();
    }

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page_title}</title>
                <style>{HERO_CSS}</style>
            </head>
            <body>
                <Hero overrides=overrides visibility=visibility />
                <script inner_html=page_script(revealed)></script>
            </body>
        </html>
    }
}
