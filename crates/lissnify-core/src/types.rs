//! Domain types shown by the carousels
//!
//! The JSON shapes follow the public REST API:
//! - `GET /api/categories/` -> [`Category`]
//! - `GET /api/testimonials/` -> [`Testimonial`]
//! - `GET /api/listenerList/` -> [`Listener`]
//!
//! [`Step`] is product copy with no backing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Carousel identity and stepping
// ─────────────────────────────────────────────────────────────────────────────

/// The carousels on the home page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarouselId {
    Categories,
    Testimonials,
    Steps,
    Listeners,
}

impl CarouselId {
    pub const ALL: [CarouselId; 4] = [
        CarouselId::Categories,
        CarouselId::Testimonials,
        CarouselId::Steps,
        CarouselId::Listeners,
    ];

    /// Section title shown above the carousel
    pub fn title(&self) -> &'static str {
        match self {
            CarouselId::Categories => "Support Categories",
            CarouselId::Testimonials => "Stories of Healing",
            CarouselId::Steps => "How It Works",
            CarouselId::Listeners => "Meet Our Listeners",
        }
    }

    /// Key used for this carousel in `config.toml`
    pub fn config_key(&self) -> &'static str {
        match self {
            CarouselId::Categories => "categories",
            CarouselId::Testimonials => "testimonials",
            CarouselId::Steps => "steps",
            CarouselId::Listeners => "listeners",
        }
    }

    /// Next carousel in display order, wrapping
    pub fn next(&self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous carousel in display order, wrapping
    pub fn prev(&self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|id| id == self).unwrap_or(0)
    }
}

impl std::fmt::Display for CarouselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config_key())
    }
}

/// How far one `next()` moves a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPolicy {
    /// One step moves a full page of `items_per_view` items
    #[default]
    Page,
    /// One step moves exactly one item
    Item,
}

impl std::fmt::Display for StepPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepPolicy::Page => write!(f, "page"),
            StepPolicy::Item => write!(f, "item"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content items
// ─────────────────────────────────────────────────────────────────────────────

/// A support category (Anxiety, Breakup, Career Stress, ...)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "supportText")]
    pub support_text: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A testimonial left by a community member
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: u8,
    pub feedback: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Avatar URL or path; initials are shown when absent
    #[serde(default)]
    pub image: Option<String>,
}

fn default_rating() -> u8 {
    5
}

/// Account summary embedded in listener records
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct UserSummary {
    #[serde(default)]
    pub u_id: Option<u64>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// A trained listener available for peer support
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Listener {
    #[serde(rename = "l_id")]
    pub id: u64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Sent by the API as a decimal string such as `"4.50"`
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub rating: f32,
    #[serde(default)]
    pub user: Option<UserSummary>,
    /// Category names the listener supports
    #[serde(default)]
    pub preferences: Vec<String>,
}

fn default_language() -> String {
    "English".to_string()
}

impl Listener {
    /// Avatar image, taken from the embedded user record
    pub fn avatar(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.profile_image.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// One step of the "how it works" walkthrough
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub benefit: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Accept either a JSON number or a decimal string
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f32),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(n) => Ok(n),
        Decimal::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Up to two uppercase initials for an avatar placeholder ("Sarah M." -> "SM")
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Render a 0-5 rating as filled and empty stars
pub fn rating_stars(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
