//! Decorative layers behind the hero content.

use leptos::prelude::*;

use crate::types::BackgroundPattern;

/// Photo, pattern and gradient orbs. Purely decorative.
#[component]
pub fn Background(pattern: BackgroundPattern, image: String) -> impl IntoView {
    // Quotes would end the CSS url() early.
    let image_style = format!("background-image: url('{}')", image.replace('\'', "%27"));
    let pattern_class = format!("hero-pattern hero-pattern-{}", pattern.as_str());

    view! {
        <div class="hero-bg-image" style=image_style></div>
        <div class=pattern_class data-pattern=pattern.as_str()></div>
        <div class="hero-orb hero-orb-primary"></div>
        <div class="hero-orb hero-orb-accent"></div>
    }
}
