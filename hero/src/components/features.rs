//! Feature pills row.

use leptos::prelude::*;

use super::icons::{select_icon, Icon, IconKey};
use super::reveal::reveal;
use crate::capabilities::VisibilityLatch;
use crate::timeline::Block;

const EDITABLE: [&str; 3] = ["feature1Text", "feature2Text", "feature3Text"];

/// Three `(icon key, text)` pills revealed together.
#[component]
pub fn FeaturePills(features: [(String, String); 3], visibility: VisibilityLatch) -> impl IntoView {
    let pills = features
        .into_iter()
        .zip(EDITABLE)
        .map(|((icon, text), editable)| {
            view! { <FeaturePill icon=select_icon(&icon) text=text editable=editable /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="hero-features"
            data-entrance=Block::Features.name()
            style=reveal(Block::Features, visibility)
        >
            {pills}
        </div>
    }
}

#[component]
fn FeaturePill(icon: IconKey, text: String, editable: &'static str) -> impl IntoView {
    view! {
        <div class="hero-pill">
            <Icon path=icon.path() name=icon.name() class="hero-icon hero-icon-primary" />
            <span data-editable=editable class="hero-muted">{text}</span>
        </div>
    }
}
