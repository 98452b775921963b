//! "Trusted by" strip.

use leptos::prelude::*;

use super::reveal::reveal;
use crate::capabilities::VisibilityLatch;
use crate::timeline::Block;

/// Number of placeholder logo slots.
pub const LOGO_SLOTS: usize = 5;

/// Caption plus a row of logo placeholders.
#[component]
pub fn TrustedBy(text: String, visibility: VisibilityLatch) -> impl IntoView {
    let slots = (0..LOGO_SLOTS)
        .map(|_| view! { <div class="hero-logo-slot"></div> })
        .collect::<Vec<_>>();

    view! {
        <div
            class="hero-trust"
            data-entrance=Block::TrustedBy.name()
            style=reveal(Block::TrustedBy, visibility)
        >
            <p data-editable="trustedByText" class="hero-trust-text">{text}</p>
            <div class="hero-logos">{slots}</div>
        </div>
    }
}
