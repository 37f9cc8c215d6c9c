//! Trending Topic Entities
//!
//! Global trending list rows and their detail records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::source::TrendSource;

/// Movement of a topic's popularity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Flat,
}

impl TrendDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
            TrendDirection::Flat => "◆",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TrendDirection::Up => "text-emerald-600",
            TrendDirection::Down => "text-rose-500",
            TrendDirection::Flat => "text-neutral-400",
        }
    }
}

/// One row of the trending list
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTopic {
    pub id: String,
    pub title_zh: String,
    pub title_en: String,
    pub score: u32,
    pub source_label: String,
    pub direction: TrendDirection,
    /// Human readable time window, e.g. "24 小时内"
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: TrendSource,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverRole {
    Celebrity,
    Kol,
    Brand,
    Media,
}

impl DriverRole {
    pub fn label(&self) -> &'static str {
        match self {
            DriverRole::Celebrity => "明星",
            DriverRole::Kol => "KOL",
            DriverRole::Brand => "品牌",
            DriverRole::Media => "媒体",
        }
    }
}

/// A person or account pushing a trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDriver {
    pub id: String,
    pub name: String,
    pub role: DriverRole,
    #[serde(default)]
    pub avatar: String,
    pub platform: TrendSource,
    #[serde(default)]
    pub followers: u64,
    pub first_post_time: DateTime<Utc>,
    #[serde(default)]
    pub is_first_mover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedPost {
    pub id: String,
    pub platform: TrendSource,
    #[serde(default)]
    pub thumbnail: String,
    pub description: String,
    pub external_url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
}

/// Extra fields shown in the trend detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingDetail {
    pub platform_breakdown: Vec<PlatformShare>,
    pub key_insight: String,
    #[serde(default)]
    pub trend_drivers: Vec<TrendDriver>,
    #[serde(default)]
    pub curated_posts: Vec<CuratedPost>,
}

impl TrendingDetail {
    /// Platform shares, largest first
    pub fn sorted_breakdown(&self) -> Vec<PlatformShare> {
        let mut shares = self.platform_breakdown.clone();
        shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        shares
    }

    /// First movers lead, everyone else by first post time
    pub fn ordered_drivers(&self) -> Vec<TrendDriver> {
        let mut drivers = self.trend_drivers.clone();
        drivers.sort_by(|a, b| {
            b.is_first_mover
                .cmp(&a.is_first_mover)
                .then_with(|| a.first_post_time.cmp(&b.first_post_time))
        });
        drivers
    }
}

/// A trending row joined with its detail record
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTopicDetail {
    pub topic: TrendingTopic,
    pub detail: TrendingDetail,
}
