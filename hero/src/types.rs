//! Hero configuration: the default record, partial overrides and the merge.
//!
//! The hero is driven by one flat [`HeroConfig`]. Callers never build it by
//! hand; they supply a [`HeroOverrides`] (every field optional) and the
//! component calls [`resolve`] on each render.
//!
//! Overrides are **presence-based**: a field set to `Some("")` or
//! `Some(false)` still wins over the default. Only an absent field (or JSON
//! `null`) falls through.
//!
//! # Example
//!
//! ```rust
//! use hero_leptos::types::{resolve, HeroConfig, HeroOverrides};
//!
//! let overrides = HeroOverrides {
//!     title: Some("X".into()),
//!     ..Default::default()
//! };
//! let config = resolve(&HeroConfig::default(), &overrides);
//!
//! assert_eq!(config.title, "X");
//! assert_eq!(config.subtitle, HeroConfig::default().subtitle);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{HeroError, Result};

/// Stock photo shown behind the hero at low opacity.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

/// Decorative layer drawn over the background image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPattern {
    /// Radial dot lattice
    #[default]
    Dots,
    /// Hairline square grid
    Grid,
    /// Diagonal colour wash
    Gradient,
}

impl BackgroundPattern {
    /// Name used in JSON, CSS class suffixes and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Grid => "grid",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for BackgroundPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundPattern {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dots" => Ok(Self::Dots),
            "grid" => Ok(Self::Grid),
            "gradient" => Ok(Self::Gradient),
            _ => Err(HeroError::UnknownPattern(s.to_string())),
        }
    }
}

/// Fully resolved hero configuration.
///
/// Field names serialize to the camelCase keys used by content-editing
/// tooling (`titleHighlight`, `primaryCTAHref`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    /// Pill above the title
    pub badge: String,
    /// First half of the headline
    pub title: String,
    /// Gradient-highlighted second half of the headline
    pub title_highlight: String,
    /// Paragraph under the headline
    pub subtitle: String,
    /// Primary button label
    #[serde(rename = "primaryCTA")]
    pub primary_cta: String,
    /// Secondary button label
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: String,
    /// Primary button destination
    #[serde(rename = "primaryCTAHref")]
    pub primary_cta_href: String,
    /// Secondary button destination
    #[serde(rename = "secondaryCTAHref")]
    pub secondary_cta_href: String,
    /// Icon key for the first feature pill (`zap`, `shield`, `globe`)
    pub feature1_icon: String,
    /// Text of the first feature pill
    pub feature1_text: String,
    /// Icon key for the second feature pill
    pub feature2_icon: String,
    /// Text of the second feature pill
    pub feature2_text: String,
    /// Icon key for the third feature pill
    pub feature3_icon: String,
    /// Text of the third feature pill
    pub feature3_text: String,
    /// Caption above the logo strip
    pub trusted_by_text: String,
    /// Whether the "trusted by" strip is rendered at all
    pub show_trusted_logos: bool,
    /// Decorative background layer
    pub background_pattern: BackgroundPattern,
    /// Whether the badge pill is rendered at all
    pub show_animated_badge: bool,
    /// Background photo URL
    pub background_image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            badge: "Powering the future of automation".into(),
            title: "Next-generation robotics".into(),
            title_highlight: "for industry 4.0".into(),
            subtitle: "Advanced AI-powered robotic solutions that transform manufacturing, \
                       logistics, and industrial operations with precision, efficiency, and \
                       intelligent automation."
                .into(),
            primary_cta: "Explore Solutions".into(),
            secondary_cta: "Schedule Demo".into(),
            primary_cta_href: "/solutions".into(),
            secondary_cta_href: "/demo".into(),
            feature1_icon: "zap".into(),
            feature1_text: "AI-powered precision".into(),
            feature2_icon: "shield".into(),
            feature2_text: "Industrial grade".into(),
            feature3_icon: "globe".into(),
            feature3_text: "Global deployment".into(),
            trusted_by_text: "Trusted by leading manufacturers worldwide".into(),
            show_trusted_logos: true,
            background_pattern: BackgroundPattern::Dots,
            show_animated_badge: true,
            background_image: DEFAULT_BACKGROUND_IMAGE.into(),
        }
    }
}

/// Override keys holding booleans; all other keys hold strings or the pattern.
pub const BOOL_KEYS: [&str; 2] = ["showTrustedLogos", "showAnimatedBadge"];

/// Partial hero configuration supplied by the caller.
///
/// Every field is optional. JSON input uses the same camelCase keys as
/// [`HeroConfig`]; unknown keys are rejected so typos surface instead of
/// silently rendering the default. Field meanings match [`HeroConfig`].
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HeroOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "primaryCTA", skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<String>,
    #[serde(rename = "secondaryCTA", skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<String>,
    #[serde(rename = "primaryCTAHref", skip_serializing_if = "Option::is_none")]
    pub primary_cta_href: Option<String>,
    #[serde(rename = "secondaryCTAHref", skip_serializing_if = "Option::is_none")]
    pub secondary_cta_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature1_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature1_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature2_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature2_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature3_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature3_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_by_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_trusted_logos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_pattern: Option<BackgroundPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_animated_badge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl HeroOverrides {
    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an overrides file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| HeroError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build overrides from `key=value` pairs (camelCase keys).
    ///
    /// Values of the boolean keys ([`BOOL_KEYS`]) are parsed as `true`/`false`;
    /// every other value stays a string, so `showTrustedLogos=false` hides the
    /// strip and `title=false` sets the headline to the text "false".
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Map::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| HeroError::Pair(pair.to_string()))?;
            let key = key.trim();
            let value = match (BOOL_KEYS.contains(&key), value) {
                (true, "true") => Value::Bool(true),
                (true, "false") => Value::Bool(false),
                (_, other) => Value::String(other.to_string()),
            };
            map.insert(key.to_string(), value);
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Layer `later` on top of `self`; fields present in `later` win.
    pub fn merge(self, later: HeroOverrides) -> HeroOverrides {
        HeroOverrides {
            badge: later.badge.or(self.badge),
            title: later.title.or(self.title),
            title_highlight: later.title_highlight.or(self.title_highlight),
            subtitle: later.subtitle.or(self.subtitle),
            primary_cta: later.primary_cta.or(self.primary_cta),
            secondary_cta: later.secondary_cta.or(self.secondary_cta),
            primary_cta_href: later.primary_cta_href.or(self.primary_cta_href),
            secondary_cta_href: later.secondary_cta_href.or(self.secondary_cta_href),
            feature1_icon: later.feature1_icon.or(self.feature1_icon),
            feature1_text: later.feature1_text.or(self.feature1_text),
            feature2_icon: later.feature2_icon.or(self.feature2_icon),
            feature2_text: later.feature2_text.or(self.feature2_text),
            feature3_icon: later.feature3_icon.or(self.feature3_icon),
            feature3_text: later.feature3_text.or(self.feature3_text),
            trusted_by_text: later.trusted_by_text.or(self.trusted_by_text),
            show_trusted_logos: later.show_trusted_logos.or(self.show_trusted_logos),
            background_pattern: later.background_pattern.or(self.background_pattern),
            show_animated_badge: later.show_animated_badge.or(self.show_animated_badge),
            background_image: later.background_image.or(self.background_image),
        }
    }

    /// Number of fields this record sets.
    pub fn len(&self) -> usize {
        [
            self.badge.is_some(),
            self.title.is_some(),
            self.title_highlight.is_some(),
            self.subtitle.is_some(),
            self.primary_cta.is_some(),
            self.secondary_cta.is_some(),
            self.primary_cta_href.is_some(),
            self.secondary_cta_href.is_some(),
            self.feature1_icon.is_some(),
            self.feature1_text.is_some(),
            self.feature2_icon.is_some(),
            self.feature2_text.is_some(),
            self.feature3_icon.is_some(),
            self.feature3_text.is_some(),
            self.trusted_by_text.is_some(),
            self.show_trusted_logos.is_some(),
            self.background_pattern.is_some(),
            self.show_animated_badge.is_some(),
            self.background_image.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn pick<T: Clone>(over: &Option<T>, default: &T) -> T {
    over.as_ref().unwrap_or(default).clone()
}

/// Shallow-merge `overrides` onto `defaults`.
///
/// Each field comes from `overrides` when present, otherwise from
/// `defaults`. Never fails.
pub fn resolve(defaults: &HeroConfig, overrides: &HeroOverrides) -> HeroConfig {
    debug!(overridden = overrides.len(), "resolving hero config");
    HeroConfig {
        badge: pick(&overrides.badge, &defaults.badge),
        title: pick(&overrides.title, &defaults.title),
        title_highlight: pick(&overrides.title_highlight, &defaults.title_highlight),
        subtitle: pick(&overrides.subtitle, &defaults.subtitle),
        primary_cta: pick(&overrides.primary_cta, &defaults.primary_cta),
        secondary_cta: pick(&overrides.secondary_cta, &defaults.secondary_cta),
        primary_cta_href: pick(&overrides.primary_cta_href, &defaults.primary_cta_href),
        secondary_cta_href: pick(&overrides.secondary_cta_href, &defaults.secondary_cta_href),
        feature1_icon: pick(&overrides.feature1_icon, &defaults.feature1_icon),
        feature1_text: pick(&overrides.feature1_text, &defaults.feature1_text),
        feature2_icon: pick(&overrides.feature2_icon, &defaults.feature2_icon),
        feature2_text: pick(&overrides.feature2_text, &defaults.feature2_text),
        feature3_icon: pick(&overrides.feature3_icon, &defaults.feature3_icon),
        feature3_text: pick(&overrides.feature3_text, &defaults.feature3_text),
        trusted_by_text: pick(&overrides.trusted_by_text, &defaults.trusted_by_text),
        show_trusted_logos: pick(&overrides.show_trusted_logos, &defaults.show_trusted_logos),
        background_pattern: pick(&overrides.background_pattern, &defaults.background_pattern),
        show_animated_badge: pick(&overrides.show_animated_badge, &defaults.show_animated_badge),
        background_image: pick(&overrides.background_image, &defaults.background_image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_overrides_yield_defaults() {
        let config = resolve(&HeroConfig::default(), &HeroOverrides::default());
        assert_eq!(config, HeroConfig::default());
    }

    #[test]
    fn title_override_keeps_subtitle() {
        let overrides = HeroOverrides {
            title: Some("X".into()),
            ..Default::default()
        };
        let config = resolve(&HeroConfig::default(), &overrides);
        assert_eq!(config.title, "X");
        assert_eq!(config.subtitle, HeroConfig::default().subtitle);
    }

    #[test]
    fn empty_string_and_false_overrides_win() {
        let overrides = HeroOverrides {
            badge: Some(String::new()),
            show_trusted_logos: Some(false),
            show_animated_badge: Some(false),
            ..Default::default()
        };
        let config = resolve(&HeroConfig::default(), &overrides);
        assert_eq!(config.badge, "");
        assert!(!config.show_trusted_logos);
        assert!(!config.show_animated_badge);
    }

    #[test]
    fn resolve_agrees_with_overrides_and_defaults() {
        let defaults = HeroConfig::default();
        let overrides = HeroOverrides {
            title_highlight: Some("for warehouses".into()),
            primary_cta_href: Some("#contact".into()),
            feature2_icon: Some("globe".into()),
            background_pattern: Some(BackgroundPattern::Grid),
            ..Default::default()
        };
        let config = resolve(&defaults, &overrides);

        assert_eq!(config.title_highlight, "for warehouses");
        assert_eq!(config.primary_cta_href, "#contact");
        assert_eq!(config.feature2_icon, "globe");
        assert_eq!(config.background_pattern, BackgroundPattern::Grid);

        assert_eq!(config.title, defaults.title);
        assert_eq!(config.secondary_cta_href, defaults.secondary_cta_href);
        assert_eq!(config.feature1_icon, defaults.feature1_icon);
        assert_eq!(config.show_trusted_logos, defaults.show_trusted_logos);
        assert_eq!(config.background_image, defaults.background_image);
    }

    #[test]
    fn resolve_uses_the_given_defaults_not_the_builtin_ones() {
        let defaults = HeroConfig {
            title: "House title".into(),
            ..Default::default()
        };
        let config = resolve(&defaults, &HeroOverrides::default());
        assert_eq!(config.title, "House title");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let overrides = HeroOverrides::from_json(
            r#"{
                "title": "Robots",
                "primaryCTAHref": "/buy",
                "showTrustedLogos": false,
                "backgroundPattern": "gradient"
            }"#,
        )
        .unwrap();
        assert_eq!(overrides.title.as_deref(), Some("Robots"));
        assert_eq!(overrides.primary_cta_href.as_deref(), Some("/buy"));
        assert_eq!(overrides.show_trusted_logos, Some(false));
        assert_eq!(overrides.background_pattern, Some(BackgroundPattern::Gradient));
        assert_eq!(overrides.len(), 4);
    }

    #[test]
    fn json_null_counts_as_absent() {
        let overrides = HeroOverrides::from_json(r#"{"title": null}"#).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn json_rejects_unknown_keys() {
        let err = HeroOverrides::from_json(r#"{"tittle": "typo"}"#).unwrap_err();
        assert!(matches!(err, HeroError::Json(_)));
        assert!(err.to_string().contains("tittle"));
    }

    #[test]
    fn json_rejects_unknown_pattern() {
        let err = HeroOverrides::from_json(r#"{"backgroundPattern": "stripes"}"#).unwrap_err();
        assert!(matches!(err, HeroError::Json(_)));
    }

    #[test]
    fn pairs_parse_booleans_and_strings() {
        let overrides = HeroOverrides::from_pairs([
            "title=Hello world",
            "showAnimatedBadge=false",
            "secondaryCTAHref=https://example.com/demo?a=b",
        ])
        .unwrap();
        assert_eq!(overrides.title.as_deref(), Some("Hello world"));
        assert_eq!(overrides.show_animated_badge, Some(false));
        assert_eq!(
            overrides.secondary_cta_href.as_deref(),
            Some("https://example.com/demo?a=b")
        );
    }

    #[test]
    fn pairs_without_equals_are_rejected() {
        let err = HeroOverrides::from_pairs(["title"]).unwrap_err();
        assert!(matches!(err, HeroError::Pair(ref p) if p == "title"));
    }

    #[test]
    fn pairs_keep_true_false_as_text_for_string_fields() {
        let overrides =
            HeroOverrides::from_pairs(["title=false", "badge=true", "showTrustedLogos=true"])
                .unwrap();
        assert_eq!(overrides.title.as_deref(), Some("false"));
        assert_eq!(overrides.badge.as_deref(), Some("true"));
        assert_eq!(overrides.show_trusted_logos, Some(true));
    }

    #[test]
    fn pairs_with_non_bool_for_bool_field_are_rejected() {
        let err = HeroOverrides::from_pairs(["showAnimatedBadge=yes"]).unwrap_err();
        assert!(matches!(err, HeroError::Json(_)));
    }

    #[test]
    fn merge_prefers_later_fields() {
        let file = HeroOverrides {
            title: Some("From file".into()),
            badge: Some("Badge".into()),
            ..Default::default()
        };
        let cli = HeroOverrides {
            title: Some("From CLI".into()),
            ..Default::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.title.as_deref(), Some("From CLI"));
        assert_eq!(merged.badge.as_deref(), Some("Badge"));
    }

    #[test]
    fn pattern_from_str() {
        assert_eq!("grid".parse::<BackgroundPattern>().unwrap(), BackgroundPattern::Grid);
        assert_eq!(" Dots ".parse::<BackgroundPattern>().unwrap(), BackgroundPattern::Dots);
        let err = "stripes".parse::<BackgroundPattern>().unwrap_err();
        assert!(matches!(err, HeroError::UnknownPattern(ref p) if p == "stripes"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = HeroOverrides::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
