//! Raw Fixture Records
//!
//! snake_case shapes as they appear in the JSON fixture files.

use serde::Deserialize;
use crate::domain::{BrandUpdateKind, TrendDirection};

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrendingTopic {
    pub id: String,
    pub title_zh: String,
    pub title_en: String,
    pub score: u32,
    pub sources: String,
    #[serde(default)]
    pub direction: TrendDirection,
    pub time_window: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBrandUpdate {
    pub id: String,
    pub brand: String,
    pub group: String,
    #[serde(rename = "type", default)]
    pub kind: BrandUpdateKind,
    pub title: String,
    pub event_date: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHotItem {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub buy_link: String,
    pub score: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStyleKeyword {
    pub id: String,
    pub keyword_zh: String,
    pub keyword_en: String,
    pub frequency: u32,
    #[serde(default)]
    pub sources: String,
}
