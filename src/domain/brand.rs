//! Brand Update Entities
//!
//! Brand intelligence rows plus the detail shown in the brand modal
//! (news, three-year milestones, financial highlights).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What sort of brand news an update is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrandUpdateKind {
    Runway,
    Collection,
    #[default]
    Business,
}

impl BrandUpdateKind {
    /// Label in the brand update list
    pub fn list_label(&self) -> &'static str {
        match self {
            BrandUpdateKind::Runway => "Show / Collection",
            BrandUpdateKind::Collection => "Collection",
            BrandUpdateKind::Business => "Business",
        }
    }

    /// Label on the detail modal badge
    pub fn badge_label(&self) -> &'static str {
        match self {
            BrandUpdateKind::Runway => "Show / Runway",
            BrandUpdateKind::Collection => "Collection",
            BrandUpdateKind::Business => "Business",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BrandUpdateKind::Runway => "#8B5CF6",
            BrandUpdateKind::Collection => "#3B82F6",
            BrandUpdateKind::Business => "#10B981",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandUpdate {
    pub id: String,
    pub brand: String,
    pub group: String,
    pub kind: BrandUpdateKind,
    pub title: String,
    pub date: String,
    pub summary: String,
}

impl BrandUpdate {
    /// Single-letter avatar for the brand
    pub fn initial(&self) -> String {
        self.brand.chars().take(1).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneType {
    Personnel,
    Financial,
    Marketing,
    Product,
}

impl MilestoneType {
    pub const ALL: [MilestoneType; 4] = [
        MilestoneType::Personnel,
        MilestoneType::Financial,
        MilestoneType::Marketing,
        MilestoneType::Product,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            MilestoneType::Personnel => "👔",
            MilestoneType::Financial => "📊",
            MilestoneType::Marketing => "🎯",
            MilestoneType::Product => "🛍️",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MilestoneType::Personnel => "#EF4444",
            MilestoneType::Financial => "#3B82F6",
            MilestoneType::Marketing => "#8B5CF6",
            MilestoneType::Product => "#F59E0B",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MilestoneType::Personnel => "人事变动",
            MilestoneType::Financial => "财报/业绩",
            MilestoneType::Marketing => "营销动作",
            MilestoneType::Product => "产品动态",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMilestone {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MilestoneType,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionShare {
    pub region: String,
    pub percentage: f64,
    pub yoy_change: f64,
}

/// Revenue figure for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub value: f64,
    /// "B" for billion, "M" for million
    pub unit: String,
    pub currency: String,
    pub year: i32,
    /// Only set for quarterly figures ("Q1".."Q4")
    #[serde(default)]
    pub quarter: Option<String>,
    pub yoy_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandFinancials {
    pub annual_revenue: Revenue,
    pub quarterly_revenue: Revenue,
    pub region_breakdown: Vec<RegionShare>,
    pub data_source: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandNewsDetail {
    pub title_zh: String,
    pub title_en: String,
    /// Markdown body
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdateDetail {
    pub brand_id: String,
    pub brand_name: String,
    pub brand_name_zh: String,
    pub group: String,
    pub news_detail: BrandNewsDetail,
    pub milestones: Vec<BrandMilestone>,
    pub financials: BrandFinancials,
}

impl BrandUpdateDetail {
    /// Milestones newest first, optionally narrowed to one type
    pub fn milestones_filtered(&self, filter: Option<MilestoneType>) -> Vec<BrandMilestone> {
        let mut milestones: Vec<_> = self
            .milestones
            .iter()
            .filter(|m| filter.map_or(true, |kind| m.kind == kind))
            .cloned()
            .collect();
        milestones.sort_by(|a, b| b.date.cmp(&a.date));
        milestones
    }

    /// Two-letter logo placeholder
    pub fn monogram(&self) -> String {
        self.brand_name.chars().take(2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(id: &str, date: &str, kind: MilestoneType) -> BrandMilestone {
        BrandMilestone {
            id: id.to_string(),
            date: date.parse().unwrap(),
            kind,
            title: id.to_string(),
            description: String::new(),
        }
    }

    fn detail(milestones: Vec<BrandMilestone>) -> BrandUpdateDetail {
        let revenue = Revenue {
            value: 1.0,
            unit: "B".to_string(),
            currency: "EUR".to_string(),
            year: 2024,
            quarter: None,
            yoy_change: 0.0,
        };
        BrandUpdateDetail {
            brand_id: "b".to_string(),
            brand_name: "Bottega Veneta".to_string(),
            brand_name_zh: "葆蝶家".to_string(),
            group: "Kering".to_string(),
            news_detail: BrandNewsDetail {
                title_zh: String::new(),
                title_en: String::new(),
                content: String::new(),
                image_url: None,
                source_url: String::new(),
            },
            milestones,
            financials: BrandFinancials {
                annual_revenue: revenue.clone(),
                quarterly_revenue: revenue,
                region_breakdown: vec![],
                data_source: String::new(),
                last_updated: String::new(),
            },
        }
    }

    #[test]
    fn test_milestones_newest_first() {
        let d = detail(vec![
            milestone("a", "2022-03-01", MilestoneType::Product),
            milestone("b", "2024-01-15", MilestoneType::Personnel),
            milestone("c", "2023-07-09", MilestoneType::Product),
        ]);

        let ids: Vec<_> = d.milestones_filtered(None).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_milestones_filter_by_type() {
        let d = detail(vec![
            milestone("a", "2022-03-01", MilestoneType::Product),
            milestone("b", "2024-01-15", MilestoneType::Personnel),
            milestone("c", "2023-07-09", MilestoneType::Product),
        ]);

        let ids: Vec<_> = d
            .milestones_filtered(Some(MilestoneType::Product))
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert!(d.milestones_filtered(Some(MilestoneType::Marketing)).is_empty());
    }

    #[test]
    fn test_monogram_handles_multibyte() {
        let mut d = detail(vec![]);
        assert_eq!(d.monogram(), "Bo");
        d.brand_name = "香奈儿".to_string();
        assert_eq!(d.monogram(), "香奈");
    }
}
