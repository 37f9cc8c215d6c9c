//! Fixture Mapper
//!
//! Raw fixture records to typed view models.

use crate::domain::{BrandUpdate, HotItem, KeywordSource, StyleKeyword, TrendSource, TrendingTopic};
use super::raw::{RawBrandUpdate, RawHotItem, RawStyleKeyword, RawTrendingTopic};

/// Human label for a fixture time window; unknown windows pass through
pub fn format_time_window(window: &str) -> String {
    match window {
        "realtime" => "实时".to_string(),
        "24h" => "24 小时内".to_string(),
        "7d" => "7 天内".to_string(),
        other => other.to_string(),
    }
}

/// Spread `frequency` evenly over the comma separated `sources`.
///
/// Each source gets the rounded share, never less than 1. The shares
/// are not reconciled, so their sum may differ from `frequency`.
/// With no usable source names the whole frequency lands in a single
/// unlabeled bucket.
pub fn split_source_frequency(sources: &str, frequency: u32) -> Vec<KeywordSource> {
    let names: Vec<&str> = sources
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return vec![KeywordSource { source: None, count: frequency }];
    }

    let share = (f64::from(frequency) / names.len() as f64).round().max(1.0) as u32;
    names
        .into_iter()
        .map(|name| KeywordSource {
            source: Some(TrendSource::infer(name)),
            count: share,
        })
        .collect()
}

impl From<RawTrendingTopic> for TrendingTopic {
    fn from(raw: RawTrendingTopic) -> Self {
        TrendingTopic {
            timestamp: format_time_window(&raw.time_window),
            id: raw.id,
            title_zh: raw.title_zh,
            title_en: raw.title_en,
            score: raw.score,
            source_label: raw.sources,
            direction: raw.direction,
        }
    }
}

impl From<RawBrandUpdate> for BrandUpdate {
    fn from(raw: RawBrandUpdate) -> Self {
        BrandUpdate {
            id: raw.id,
            brand: raw.brand,
            group: raw.group,
            kind: raw.kind,
            title: raw.title,
            date: raw.event_date,
            summary: raw.summary,
        }
    }
}

impl From<RawHotItem> for HotItem {
    fn from(raw: RawHotItem) -> Self {
        HotItem {
            id: raw.id,
            brand: raw.brand,
            name: raw.name,
            category: raw.category,
            price: raw.price,
            currency: raw.currency,
            image_url: raw.image_url,
            buy_link: raw.buy_link,
            score: raw.score,
        }
    }
}

impl From<RawStyleKeyword> for StyleKeyword {
    fn from(raw: RawStyleKeyword) -> Self {
        StyleKeyword {
            sources: split_source_frequency(&raw.sources, raw.frequency),
            id: raw.id,
            keyword_zh: raw.keyword_zh,
            keyword_en: raw.keyword_en,
            frequency: raw.frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BrandUpdateKind, TrendDirection};

    #[test]
    fn test_format_time_window() {
        assert_eq!(format_time_window("realtime"), "实时");
        assert_eq!(format_time_window("24h"), "24 小时内");
        assert_eq!(format_time_window("7d"), "7 天内");
        assert_eq!(format_time_window("unknown"), "unknown");
        assert_eq!(format_time_window(""), "");
    }

    #[test]
    fn test_split_even() {
        let split = split_source_frequency("Instagram, TikTok", 10);
        assert_eq!(
            split,
            vec![
                KeywordSource { source: Some(TrendSource::Instagram), count: 5 },
                KeywordSource { source: Some(TrendSource::Tiktok), count: 5 },
            ]
        );
    }

    #[test]
    fn test_split_empty_is_single_unlabeled_bucket() {
        assert_eq!(split_source_frequency("", 7), vec![KeywordSource { source: None, count: 7 }]);
        assert_eq!(split_source_frequency(" , ,", 7), vec![KeywordSource { source: None, count: 7 }]);
    }

    #[test]
    fn test_split_rounding_and_floor() {
        // 2.5 rounds up
        let counts: Vec<_> = split_source_frequency("Google,Baidu", 5).iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![3, 3]);

        // 0.33 floors at 1
        let counts: Vec<_> = split_source_frequency("Google,Baidu,Amazon", 1).iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);

        // Drift is left as is: 3 * 3 != 10
        let total: u32 = split_source_frequency("a,b,c", 10).iter().map(|s| s.count).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn test_split_skips_blank_segments() {
        let split = split_source_frequency("小红书,, 淘宝 ,", 9);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].source, Some(TrendSource::Xiaohongshu));
        assert_eq!(split[1].source, Some(TrendSource::Taobao));
        assert!(split.iter().all(|s| s.count == 5));
    }

    #[test]
    fn test_raw_trending_maps_window_label() {
        let raw: RawTrendingTopic = serde_json::from_str(
            r#"{"id":"t1","title_zh":"红毯","title_en":"Red carpet","score":98,
                "sources":"Instagram / TikTok","direction":"up","time_window":"24h"}"#,
        )
        .unwrap();

        let topic = TrendingTopic::from(raw);
        assert_eq!(topic.timestamp, "24 小时内");
        assert_eq!(topic.source_label, "Instagram / TikTok");
        assert_eq!(topic.direction, TrendDirection::Up);
    }

    #[test]
    fn test_raw_brand_update_type_field() {
        let raw: RawBrandUpdate = serde_json::from_str(
            r#"{"id":"b1","brand":"Chanel","group":"Chanel","type":"runway",
                "title":"Cruise show","event_date":"2024-05-02","summary":"..."}"#,
        )
        .unwrap();

        let update = BrandUpdate::from(raw);
        assert_eq!(update.kind, BrandUpdateKind::Runway);
        assert_eq!(update.date, "2024-05-02");
    }

    #[test]
    fn test_raw_keyword_splits_sources() {
        let raw: RawStyleKeyword = serde_json::from_str(
            r#"{"id":"k1","keyword_zh":"芭蕾风","keyword_en":"Balletcore","frequency":12,"sources":"TikTok, 小红书, Google"}"#,
        )
        .unwrap();

        let keyword = StyleKeyword::from(raw);
        assert_eq!(keyword.frequency, 12);
        assert_eq!(keyword.sources.len(), 3);
        assert!(keyword.sources.iter().all(|s| s.count == 4));
    }
}
