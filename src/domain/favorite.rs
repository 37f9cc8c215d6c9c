//! Favorite Entity
//!
//! A user bookmark pointing at one source record by (kind, id).
//! Display fields are carried along so the favorites list renders
//! without joining back to the fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which kind of record a favorite points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FavoriteKind {
    Trending,
    BrandUpdate,
    HotItem,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Trending => "trending",
            FavoriteKind::BrandUpdate => "brandUpdate",
            FavoriteKind::HotItem => "hotItem",
        }
    }

    /// Section label used in the favorites panel
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteKind::Trending => "热榜话题",
            FavoriteKind::BrandUpdate => "品牌动态",
            FavoriteKind::HotItem => "爆款单品",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTrending {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title_zh: String,
    pub title_en: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBrandUpdate {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub brand: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteHotItem {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

/// A persisted favorite, tagged by `kind` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FavoriteEntry {
    Trending(FavoriteTrending),
    BrandUpdate(FavoriteBrandUpdate),
    HotItem(FavoriteHotItem),
}

impl FavoriteEntry {
    pub fn trending(id: impl Into<String>, title_zh: impl Into<String>, title_en: impl Into<String>) -> Self {
        FavoriteEntry::Trending(FavoriteTrending {
            id: id.into(),
            created_at: Utc::now(),
            title_zh: title_zh.into(),
            title_en: title_en.into(),
        })
    }

    pub fn brand_update(id: impl Into<String>, brand: impl Into<String>, title: impl Into<String>) -> Self {
        FavoriteEntry::BrandUpdate(FavoriteBrandUpdate {
            id: id.into(),
            created_at: Utc::now(),
            brand: brand.into(),
            title: title.into(),
        })
    }

    pub fn hot_item(
        id: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        FavoriteEntry::HotItem(FavoriteHotItem {
            id: id.into(),
            created_at: Utc::now(),
            brand: brand.into(),
            name: name.into(),
            image_url: image_url.into(),
        })
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteEntry::Trending(_) => FavoriteKind::Trending,
            FavoriteEntry::BrandUpdate(_) => FavoriteKind::BrandUpdate,
            FavoriteEntry::HotItem(_) => FavoriteKind::HotItem,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FavoriteEntry::Trending(e) => &e.id,
            FavoriteEntry::BrandUpdate(e) => &e.id,
            FavoriteEntry::HotItem(e) => &e.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FavoriteEntry::Trending(e) => e.created_at,
            FavoriteEntry::BrandUpdate(e) => e.created_at,
            FavoriteEntry::HotItem(e) => e.created_at,
        }
    }

    /// Same entry re-stamped with a new favorite time
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        match &mut self {
            FavoriteEntry::Trending(e) => e.created_at = at,
            FavoriteEntry::BrandUpdate(e) => e.created_at = at,
            FavoriteEntry::HotItem(e) => e.created_at = at,
        }
        self
    }

    /// True when this entry refers to the given record
    pub fn refers_to(&self, kind: FavoriteKind, id: &str) -> bool {
        self.kind() == kind && self.id() == id
    }

    /// Primary display line
    pub fn title(&self) -> &str {
        match self {
            FavoriteEntry::Trending(e) => &e.title_zh,
            FavoriteEntry::BrandUpdate(e) => &e.title,
            FavoriteEntry::HotItem(e) => &e.name,
        }
    }

    /// Secondary display line
    pub fn subtitle(&self) -> &str {
        match self {
            FavoriteEntry::Trending(e) => &e.title_en,
            FavoriteEntry::BrandUpdate(e) => &e.brand,
            FavoriteEntry::HotItem(e) => &e.brand,
        }
    }
}
