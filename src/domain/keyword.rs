//! Style Keyword Entity
//!
//! Recurring style / silhouette / color / material keywords for the word cloud.

use super::source::TrendSource;

/// Mentions attributed to one source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSource {
    /// `None` when the fixture named no source at all
    pub source: Option<TrendSource>,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleKeyword {
    pub id: String,
    pub keyword_zh: String,
    pub keyword_en: String,
    pub frequency: u32,
    pub sources: Vec<KeywordSource>,
}
