//! Leptos components that make up the hero.
//!
//! # Component Hierarchy
//!
//! ```text
//! HeroDocument (standalone page, SSR only)
//! └── Hero
//!     ├── Background
//!     ├── Badge                (entrance: badge)
//!     ├── title / highlight    (entrance: title, title-highlight)
//!     ├── subtitle             (entrance: subtitle)
//!     ├── FeaturePills         (entrance: features)
//!     ├── FloatingIllustration (float loop, always running)
//!     ├── CtaButton x2         (entrance: ctas, pointer scale)
//!     └── TrustedBy            (entrance: trusted-by)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use hero_leptos::components::Hero;
//! use hero_leptos::types::HeroOverrides;
//!
//! let overrides = HeroOverrides { title: Some("Robots".into()), ..Default::default() };
//! view! { <Hero overrides=overrides /> }
//! ```

mod background;
mod cta;
mod document;
mod features;
mod hero;
mod icons;
mod reveal;
mod trust;

pub use background::Background;
pub use cta::{CtaButton, CtaVariant};
pub use document::HeroDocument;
pub use features::FeaturePills;
pub use hero::Hero;
pub use icons::*;
pub use reveal::reveal;
pub use trust::{TrustedBy, LOGO_SLOTS};
