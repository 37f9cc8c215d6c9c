//! Fixture Loading
//!
//! Static JSON data embedded at compile time, decoded once at startup.

mod raw;
mod mapper;

use std::collections::HashMap;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{BrandUpdate, BrandUpdateDetail, HotItem, StyleKeyword, TrendingDetail, TrendingTopic};
use raw::{RawBrandUpdate, RawHotItem, RawStyleKeyword, RawTrendingTopic};

pub use mapper::{format_time_window, split_source_frequency};

const TRENDING_TOPICS: &str = include_str!("../../data/trending_topics.json");
const TRENDING_DETAILS: &str = include_str!("../../data/trending_details.json");
const BRAND_UPDATES: &str = include_str!("../../data/brand_updates.json");
const BRAND_DETAILS: &str = include_str!("../../data/brand_details.json");
const HOT_ITEMS: &str = include_str!("../../data/hot_items.json");
const STYLE_KEYWORDS: &str = include_str!("../../data/style_keywords.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture '{name}' is malformed: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { name, source })
}

fn parse_mapped<R: DeserializeOwned, T: From<R>>(name: &'static str, json: &str) -> Result<Vec<T>, FixtureError> {
    let raw: Vec<R> = parse(name, json)?;
    Ok(raw.into_iter().map(T::from).collect())
}

pub fn trending_topics() -> Result<Vec<TrendingTopic>, FixtureError> {
    parse_mapped::<RawTrendingTopic, _>("trending_topics", TRENDING_TOPICS)
}

/// Detail records keyed by trending topic id
pub fn trending_details() -> Result<HashMap<String, TrendingDetail>, FixtureError> {
    parse("trending_details", TRENDING_DETAILS)
}

pub fn brand_updates() -> Result<Vec<BrandUpdate>, FixtureError> {
    parse_mapped::<RawBrandUpdate, _>("brand_updates", BRAND_UPDATES)
}

/// Detail records keyed by brand update id
pub fn brand_details() -> Result<HashMap<String, BrandUpdateDetail>, FixtureError> {
    parse("brand_details", BRAND_DETAILS)
}

pub fn hot_items() -> Result<Vec<HotItem>, FixtureError> {
    parse_mapped::<RawHotItem, _>("hot_items", HOT_ITEMS)
}

pub fn style_keywords() -> Result<Vec<StyleKeyword>, FixtureError> {
    parse_mapped::<RawStyleKeyword, _>("style_keywords", STYLE_KEYWORDS)
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub trending: Vec<TrendingTopic>,
    pub trending_details: HashMap<String, TrendingDetail>,
    pub brand_updates: Vec<BrandUpdate>,
    pub brand_details: HashMap<String, BrandUpdateDetail>,
    pub hot_items: Vec<HotItem>,
    pub keywords: Vec<StyleKeyword>,
}

impl Fixtures {
    /// Decode every fixture. A broken file renders as an empty section.
    pub fn load() -> Self {
        let fixtures = Self {
            trending: or_empty(trending_topics()),
            trending_details: or_empty(trending_details()),
            brand_updates: or_empty(brand_updates()),
            brand_details: or_empty(brand_details()),
            hot_items: or_empty(hot_items()),
            keywords: or_empty(style_keywords()),
        };
        log::info!(
            "[FIXTURES] Loaded {} topics, {} brand updates, {} items, {} keywords",
            fixtures.trending.len(),
            fixtures.brand_updates.len(),
            fixtures.hot_items.len(),
            fixtures.keywords.len()
        );
        fixtures
    }
}

fn or_empty<T: Default>(result: Result<T, FixtureError>) -> T {
    result.unwrap_or_else(|e| {
        log::error!("[FIXTURES] {}", e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixtures_decode() {
        assert!(!trending_topics().unwrap().is_empty());
        assert!(!brand_updates().unwrap().is_empty());
        assert!(!hot_items().unwrap().is_empty());
        assert!(!style_keywords().unwrap().is_empty());
        assert!(!trending_details().unwrap().is_empty());
        assert!(!brand_details().unwrap().is_empty());
    }

    #[test]
    fn test_detail_keys_reference_existing_rows() {
        let topics = trending_topics().unwrap();
        for id in trending_details().unwrap().keys() {
            assert!(topics.iter().any(|t| &t.id == id), "orphan trending detail {}", id);
        }

        let updates = brand_updates().unwrap();
        for id in brand_details().unwrap().keys() {
            assert!(updates.iter().any(|u| &u.id == id), "orphan brand detail {}", id);
        }
    }

    #[test]
    fn test_ids_unique_per_fixture() {
        let mut ids: Vec<_> = trending_topics().unwrap().into_iter().map(|t| t.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_malformed_fixture_reports_name() {
        let err = parse::<Vec<RawHotItem>>("hot_items", "{").unwrap_err();
        assert!(err.to_string().starts_with("fixture 'hot_items' is malformed"));
    }
}
