//! Trend Source
//!
//! Platforms a trend signal can come from.

use serde::{Deserialize, Serialize};

/// Social, search and e-commerce platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSource {
    Instagram,
    Tiktok,
    Xiaohongshu,
    Weibo,
    Google,
    Baidu,
    Amazon,
    Taobao,
}

impl TrendSource {
    /// Classify a free-text source label.
    ///
    /// Checks run in a fixed priority order, so a label naming several
    /// platforms resolves to the first one in this list. Unknown labels
    /// fall back to Instagram.
    pub fn infer(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("instagram") {
            TrendSource::Instagram
        } else if has("tiktok") {
            TrendSource::Tiktok
        } else if has("小红书") || has("xiaohongshu") {
            TrendSource::Xiaohongshu
        } else if has("google") {
            TrendSource::Google
        } else if has("baidu") || has("百度") {
            TrendSource::Baidu
        } else if has("amazon") {
            TrendSource::Amazon
        } else if has("taobao") || has("淘宝") {
            TrendSource::Taobao
        } else {
            TrendSource::Instagram
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendSource::Instagram => "Instagram",
            TrendSource::Tiktok => "TikTok",
            TrendSource::Xiaohongshu => "小红书",
            TrendSource::Weibo => "微博",
            TrendSource::Google => "Google",
            TrendSource::Baidu => "百度",
            TrendSource::Amazon => "Amazon",
            TrendSource::Taobao => "淘宝",
        }
    }

    /// Platform brand color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            TrendSource::Instagram => "#E4405F",
            TrendSource::Tiktok => "#000000",
            TrendSource::Xiaohongshu => "#FE2C55",
            TrendSource::Weibo => "#E6162D",
            TrendSource::Google => "#4285F4",
            TrendSource::Baidu => "#2932E1",
            TrendSource::Amazon => "#FF9900",
            TrendSource::Taobao => "#FF5000",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TrendSource::Instagram => "📷",
            TrendSource::Tiktok => "🎵",
            TrendSource::Xiaohongshu => "📕",
            TrendSource::Weibo => "🔴",
            TrendSource::Google => "🔍",
            TrendSource::Baidu => "🐾",
            TrendSource::Amazon => "📦",
            TrendSource::Taobao => "🛒",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_known_platforms() {
        assert_eq!(TrendSource::infer("淘宝直播"), TrendSource::Taobao);
        assert_eq!(TrendSource::infer("amazon prime"), TrendSource::Amazon);
        assert_eq!(TrendSource::infer("  TikTok Shop "), TrendSource::Tiktok);
        assert_eq!(TrendSource::infer("小红书笔记"), TrendSource::Xiaohongshu);
        assert_eq!(TrendSource::infer("Baidu Index"), TrendSource::Baidu);
        assert_eq!(TrendSource::infer("Google Trends"), TrendSource::Google);
    }

    #[test]
    fn test_infer_defaults_to_instagram() {
        assert_eq!(TrendSource::infer("unknown platform"), TrendSource::Instagram);
        assert_eq!(TrendSource::infer(""), TrendSource::Instagram);
    }

    #[test]
    fn test_infer_priority_order() {
        // Combined labels resolve to whichever check comes first
        assert_eq!(TrendSource::infer("Instagram/TikTok"), TrendSource::Instagram);
        assert_eq!(TrendSource::infer("TikTok / Instagram"), TrendSource::Instagram);
        assert_eq!(TrendSource::infer("淘宝 & Amazon"), TrendSource::Amazon);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TrendSource::Xiaohongshu).unwrap();
        assert_eq!(json, "\"xiaohongshu\"");
        let parsed: TrendSource = serde_json::from_str("\"weibo\"").unwrap();
        assert_eq!(parsed, TrendSource::Weibo);
    }
}
