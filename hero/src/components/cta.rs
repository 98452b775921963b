//! Call-to-action buttons.
//!
//! Each button sits in a wrapper that scales with pointer input
//! ([`PointerState`]); the button itself dispatches its [`CtaAction`] on
//! click. The wrapper also carries the target scales as `data-scale-*` so
//! the static page script can reproduce the effect without WASM.

use leptos::prelude::*;

use super::icons::{Icon, ICON_ARROW_RIGHT};
use crate::capabilities::CtaAction;
use crate::timeline::{PointerInput, PointerState, HOVER_SCALE, PRESS_SCALE};

/// Visual weight of a CTA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    /// Filled button with trailing arrow
    Primary,
    /// Outlined button
    Secondary,
}

impl CtaVariant {
    fn class(self) -> &'static str {
        match self {
            CtaVariant::Primary => "hero-btn hero-btn-primary",
            CtaVariant::Secondary => "hero-btn hero-btn-outline",
        }
    }

    /// `data-editable` key of the label.
    pub fn editable(self) -> &'static str {
        match self {
            CtaVariant::Primary => "primaryCTA",
            CtaVariant::Secondary => "secondaryCTA",
        }
    }

    /// `data-editable-href` key of the destination.
    pub fn editable_href(self) -> &'static str {
        match self {
            CtaVariant::Primary => "primaryCTAHref",
            CtaVariant::Secondary => "secondaryCTAHref",
        }
    }
}

/// One CTA button with hover/press scaling.
#[component]
pub fn CtaButton(action: CtaAction, label: String, variant: CtaVariant) -> impl IntoView {
    let pointer = RwSignal::new(PointerState::Idle);
    let on_pointer = move |input: PointerInput| pointer.update(|state| *state = state.next(input));
    let href = action.destination().to_string();

    view! {
        <div
            class="hero-cta-motion"
            style=move || pointer.get().style()
            data-scale-hover=HOVER_SCALE.to_string()
            data-scale-press=PRESS_SCALE.to_string()
            on:pointerenter=move |_| on_pointer(PointerInput::Enter)
            on:pointerleave=move |_| on_pointer(PointerInput::Leave)
            on:pointerdown=move |_| on_pointer(PointerInput::Down)
            on:pointerup=move |_| on_pointer(PointerInput::Up)
        >
            <button
                type="button"
                class=variant.class()
                data-editable-href=variant.editable_href()
                data-href=href
                on:click=move |_| action.trigger()
            >
                <span data-editable=variant.editable()>{label}</span>
                {(variant == CtaVariant::Primary).then(|| view! {
                    <Icon path=ICON_ARROW_RIGHT size="20" class="hero-icon hero-cta-arrow" />
                })}
            </button>
        </div>
    }
}
