//! Word Cloud Weighting
//!
//! Maps a keyword frequency, relative to the min/max of the current
//! keyword set, onto one of five visual weight tiers. Color and size
//! classes both hang off the tier so they cannot drift apart.

use crate::domain::StyleKeyword;

/// Visual prominence bucket, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightTier {
    Faint,
    Mild,
    Medium,
    Strong,
    Peak,
}

impl WeightTier {
    /// Legend order, most prominent first
    pub const LEGEND: [WeightTier; 5] = [
        WeightTier::Peak,
        WeightTier::Strong,
        WeightTier::Medium,
        WeightTier::Mild,
        WeightTier::Faint,
    ];

    /// Bucket a normalized position in `[0, 1]`
    pub fn from_position(position: f64) -> Self {
        if position > 0.8 {
            WeightTier::Peak
        } else if position > 0.6 {
            WeightTier::Strong
        } else if position > 0.4 {
            WeightTier::Medium
        } else if position > 0.2 {
            WeightTier::Mild
        } else {
            WeightTier::Faint
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            WeightTier::Peak => "text-brand font-bold",
            WeightTier::Strong => "text-rose-500 font-semibold",
            WeightTier::Medium => "text-amber-600 font-medium",
            WeightTier::Mild => "text-emerald-600",
            WeightTier::Faint => "text-neutral-500",
        }
    }

    pub fn size_class(&self) -> &'static str {
        match self {
            WeightTier::Peak => "text-2xl sm:text-3xl",
            WeightTier::Strong => "text-xl sm:text-2xl",
            WeightTier::Medium => "text-lg sm:text-xl",
            WeightTier::Mild => "text-base sm:text-lg",
            WeightTier::Faint => "text-sm sm:text-base",
        }
    }

    pub fn swatch_class(&self) -> &'static str {
        match self {
            WeightTier::Peak => "bg-brand",
            WeightTier::Strong => "bg-rose-500",
            WeightTier::Medium => "bg-amber-600",
            WeightTier::Mild => "bg-emerald-600",
            WeightTier::Faint => "bg-neutral-400",
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            WeightTier::Peak => "极高热度",
            WeightTier::Strong => "高热度",
            WeightTier::Medium => "中高热度",
            WeightTier::Mild => "中热度",
            WeightTier::Faint => "一般热度",
        }
    }
}

/// Observed min/max frequency of a keyword set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRange {
    pub min: u32,
    pub max: u32,
}

impl FrequencyRange {
    /// `None` for an empty set
    pub fn of(frequencies: impl IntoIterator<Item = u32>) -> Option<Self> {
        frequencies.into_iter().fold(None, |range, f| match range {
            None => Some(FrequencyRange { min: f, max: f }),
            Some(r) => Some(FrequencyRange { min: r.min.min(f), max: r.max.max(f) }),
        })
    }

    /// Position of `frequency` within the range; 0.5 when min == max
    pub fn position(&self, frequency: u32) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        if span > 0.0 {
            (f64::from(frequency) - f64::from(self.min)) / span
        } else {
            0.5
        }
    }

    pub fn tier(&self, frequency: u32) -> WeightTier {
        WeightTier::from_position(self.position(frequency))
    }
}

/// Pair every keyword with its tier against the set's own range
pub fn weigh_keywords(keywords: &[StyleKeyword]) -> Vec<(StyleKeyword, WeightTier)> {
    let Some(range) = FrequencyRange::of(keywords.iter().map(|k| k.frequency)) else {
        return Vec::new();
    };
    keywords
        .iter()
        .map(|keyword| (keyword.clone(), range.tier(keyword.frequency)))
        .collect()
}

/// Fisher-Yates shuffle driven by a `[0, 1)` random source
pub fn shuffle<T>(items: &mut [T], mut random: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((random() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// Hover text: English keyword, frequency and per-source split
pub fn keyword_tooltip(keyword: &StyleKeyword) -> String {
    let sources = keyword
        .sources
        .iter()
        .map(|s| match s.source {
            Some(source) => format!("{} {}", source.label(), s.count),
            None => s.count.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" / ");
    format!("{} · 热度 {} · {}", keyword.keyword_en, keyword.frequency, sources)
}

/// Slight tilt for every first and second word of three
pub fn rotation_class(index: usize) -> &'static str {
    match index % 3 {
        0 => "rotate-[-3deg]",
        1 => "rotate-[2deg]",
        _ => "",
    }
}
