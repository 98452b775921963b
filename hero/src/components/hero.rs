//! The hero section itself.

use std::sync::Arc;

use leptos::html::Section;
use leptos::prelude::*;

use super::background::Background;
use super::cta::{CtaButton, CtaVariant};
use super::features::FeaturePills;
use super::icons::{Icon, IconKey};
use super::reveal::reveal;
use super::trust::TrustedBy;
use crate::capabilities::{
    default_navigator, use_visibility, CtaAction, Navigate, VisibilityLatch, VisibilityOptions,
};
use crate::timeline::{Block, FLOAT_LOOP};
use crate::types::{resolve, HeroConfig, HeroOverrides};

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

/// Landing-page hero.
///
/// `overrides` is merged onto [`HeroConfig::default`] on every render.
/// Without an injected `navigator` or `visibility`, the defaults from
/// [`crate::capabilities`] are used.
#[component]
pub fn Hero(
    /// Fields that differ from the default copy
    #[prop(optional)]
    overrides: HeroOverrides,
    /// Receives CTA destinations on click
    #[prop(optional)]
    navigator: Option<Arc<dyn Navigate>>,
    /// Reveal latch; observed from the viewport when omitted
    #[prop(optional)]
    visibility: Option<VisibilityLatch>,
) -> impl IntoView {
    let config = resolve(&HeroConfig::default(), &overrides);
    let section_ref = NodeRef::<Section>::new();
    let visibility = visibility
        .unwrap_or_else(|| use_visibility(section_ref, VisibilityOptions::default()));
    let (primary, secondary) =
        CtaAction::pair(&config, navigator.unwrap_or_else(default_navigator));

    let HeroConfig {
        badge,
        title,
        title_highlight,
        subtitle,
        primary_cta,
        secondary_cta,
        feature1_icon,
        feature1_text,
        feature2_icon,
        feature2_text,
        feature3_icon,
        feature3_text,
        trusted_by_text,
        show_trusted_logos,
        background_pattern,
        show_animated_badge,
        background_image,
        ..
    } = config;

    let features = [
        (feature1_icon, feature1_text),
        (feature2_icon, feature2_text),
        (feature3_icon, feature3_text),
    ];

    view! {
        <section
            id="hero"
            class="hero"
            node_ref=section_ref
            data-editable="hero"
        >
            <style>{FLOAT_LOOP.keyframes()}</style>
            <Background pattern=background_pattern image=background_image />

            <div class="hero-container">
                <div class="hero-stack">
                    {show_animated_badge.then(|| view! { <Badge text=badge visibility=visibility /> })}

                    <div class="hero-headline">
                        <h1
                            class="hero-title"
                            data-entrance=Block::Title.name()
                            style=reveal(Block::Title, visibility)
                        >
                            <span data-editable="title">{title}</span>
                        </h1>
                        <span
                            class="hero-highlight-wrap"
                            data-entrance=Block::TitleHighlight.name()
                            style=reveal(Block::TitleHighlight, visibility)
                        >
                            <span data-editable="titleHighlight" class="hero-highlight">
                                {title_highlight}
                            </span>
                            <svg class="hero-star" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path d=STAR_PATH></path>
                            </svg>
                        </span>
                    </div>

                    <p
                        data-editable="subtitle"
                        class="hero-subtitle"
                        data-entrance=Block::Subtitle.name()
                        style=reveal(Block::Subtitle, visibility)
                    >
                        {subtitle}
                    </p>

                    <FeaturePills features=features visibility=visibility />

                    <FloatingIllustration />

                    <div
                        class="hero-ctas"
                        data-entrance=Block::Ctas.name()
                        style=reveal(Block::Ctas, visibility)
                    >
                        <CtaButton action=primary label=primary_cta variant=CtaVariant::Primary />
                        <CtaButton action=secondary label=secondary_cta variant=CtaVariant::Secondary />
                    </div>

                    {show_trusted_logos.then(|| view! {
                        <TrustedBy text=trusted_by_text visibility=visibility />
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Badge(text: String, visibility: VisibilityLatch) -> impl IntoView {
    view! {
        <div
            class="hero-badge-wrap"
            data-entrance=Block::Badge.name()
            style=reveal(Block::Badge, visibility)
        >
            <div class="hero-badge">
                <Icon path=IconKey::Sparkles.path() name="sparkles" class="hero-icon hero-icon-pulse" />
                <span data-editable="badge" class="hero-muted">{text}</span>
            </div>
        </div>
    }
}

/// Illustration that bobs forever; never gated on visibility.
#[component]
fn FloatingIllustration() -> impl IntoView {
    view! {
        <div class="hero-float" data-loop="float" style=FLOAT_LOOP.style()>
            <div class="hero-float-card">
                <div class="hero-float-emoji">"🤖"</div>
                <div class="hero-float-sheen"></div>
            </div>
        </div>
    }
}
