//! Site configuration.
//!
//! The page reads its brand, hero and font settings from `site.json`, which
//! is embedded at build time. Every field is optional; anything missing
//! falls back to the values in the `Default` impls below.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const EMBEDDED_SITE_JSON: &str = include_str!("../site.json");

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub hero: HeroConfig,
    pub font: FontConfig,
}

impl SiteConfig {
    /// Configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Name and logo shown in the navigation bar and footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub logo_src: String,
    pub logo_alt: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Casa de David".into(),
            logo_src: "/assets/church_logo.jpg".into(),
            logo_alt: "Logo de Casa de David".into(),
        }
    }
}

/// Hero section and its parallax background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub image_src: String,
    pub alt: String,
    /// Fraction of scroll speed, not clamped.
    pub speed: f64,
    pub class_name: String,
    pub headline: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            image_src: "/assets/hero.jpg".into(),
            alt: crate::components::DEFAULT_ALT.into(),
            speed: crate::components::DEFAULT_SPEED,
            class_name: String::new(),
            headline: "Bienvenidos a Casa de David".into(),
            tagline: "Una familia que adora, sirve y crece junta.".into(),
        }
    }
}

/// Web font served by a remote provider (Google Fonts).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// CSS custom property the stylesheet reads the font stack from.
    pub css_variable: String,
    pub weights: Vec<u16>,
    pub provider_url: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            css_variable: "--font-inter".into(),
            weights: vec![400, 600, 700],
            provider_url: "https://fonts.googleapis.com/css2".into(),
        }
    }
}

impl FontConfig {
    /// e.g. `https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700&display=swap`
    pub fn stylesheet_url(&self) -> String {
        let family = self.family.trim().replace(' ', "+");
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();

        if weights.is_empty() {
            format!("{}?family={family}&display=swap", self.provider_url)
        } else {
            let weights = weights
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(";");
            format!(
                "{}?family={family}:wght@{weights}&display=swap",
                self.provider_url
            )
        }
    }

    /// Value assigned to [`Self::css_variable`].
    pub fn font_stack(&self) -> String {
        format!("'{}', ui-sans-serif, system-ui, sans-serif", self.family.trim())
    }
}
