//! SVG icons for the hero.
//!
//! Feature pills name their icon with a string key from the configuration.
//! [`select_icon`] turns that key into a closed [`IconKey`]; anything it
//! does not recognise becomes [`IconKey::Sparkles`], so a typo in content
//! never breaks the render.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_RIGHT size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "16")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "hero-icon")]
    class: &'static str,
    /// Value of the `data-icon` hook
    #[prop(default = "")]
    name: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            data-icon=name
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon variants a feature pill can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    /// Lightning bolt (`zap`)
    Zap,
    /// Shield (`shield`)
    Shield,
    /// Globe (`globe`)
    Globe,
    /// Sparkle; used for every unrecognised key
    Sparkles,
}

/// Maps a configured icon name to its variant. Total: unknown names fall
/// back to [`IconKey::Sparkles`].
pub fn select_icon(key: &str) -> IconKey {
    match key {
        "zap" => IconKey::Zap,
        "shield" => IconKey::Shield,
        "globe" => IconKey::Globe,
        _ => IconKey::Sparkles,
    }
}

impl IconKey {
    /// Canonical key name.
    pub fn name(self) -> &'static str {
        match self {
            IconKey::Zap => "zap",
            IconKey::Shield => "shield",
            IconKey::Globe => "globe",
            IconKey::Sparkles => "sparkles",
        }
    }

    /// SVG path data for this variant.
    pub fn path(self) -> &'static str {
        match self {
            IconKey::Zap => ICON_LIGHTNING,
            IconKey::Shield => ICON_SHIELD,
            IconKey::Globe => ICON_GLOBE,
            IconKey::Sparkles => ICON_SPARKLE,
        }
    }
}

// =============================================================================
// Path data (256x256 viewBox)
// =============================================================================

/// Lightning bolt
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Shield
pub const ICON_SHIELD: &str = "M208,40H48A16,16,0,0,0,32,56v56c0,52.72,25.52,84.67,46.93,102.19,23.06,18.86,46,25.27,47,25.53a8,8,0,0,0,4.2,0c1-.26,23.91-6.67,47-25.53C198.48,196.67,224,164.72,224,112V56A16,16,0,0,0,208,40Zm0,72c0,37.07-13.66,67.16-40.6,89.42A129.3,129.3,0,0,1,128,223.62a128.25,128.25,0,0,1-38.92-21.81C61.82,179.51,48,149.3,48,112V56H208Z";

/// Globe
pub const ICON_GLOBE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,16c13,0,28.56,22.48,33.8,80H94.2C99.44,62.48,115,40,128,40ZM40.37,136H78.16c1.21,25.51,7.1,48.55,16.66,64.86A88.17,88.17,0,0,1,40.37,136Zm0-16A88.17,88.17,0,0,1,94.82,55.14C85.26,71.45,79.37,94.49,78.16,120ZM128,216c-13,0-28.56-22.48-33.8-80h67.6C156.56,193.52,141,216,128,216Zm33.18-15.14c9.56-16.31,15.45-39.35,16.66-64.86h37.79A88.17,88.17,0,0,1,161.18,200.86ZM177.84,120c-1.21-25.51-7.1-48.55-16.66-64.86A88.17,88.17,0,0,1,215.63,120Z";

/// Four-point sparkle
pub const ICON_SPARKLE: &str = "M208,144a15.78,15.78,0,0,1-10.42,14.94L146,178l-19,51.62a15.92,15.92,0,0,1-29.88,0L78,178l-51.62-19a15.92,15.92,0,0,1,0-29.88L78,110l19-51.62a15.92,15.92,0,0,1,29.88,0L146,110l51.62,19A15.78,15.78,0,0,1,208,144Z";

/// Arrow pointing right (primary CTA)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";
