//! Domain Layer
//!
//! View-model entities and the favorites sum type.
//! Nothing here touches the browser.

mod favorite;
mod source;
mod trending;
mod brand;
mod hot_item;
mod keyword;

pub use favorite::{FavoriteEntry, FavoriteKind, FavoriteTrending, FavoriteBrandUpdate, FavoriteHotItem};
pub use source::TrendSource;
pub use trending::{
    TrendDirection, TrendingTopic, TrendingDetail, TrendingTopicDetail,
    PlatformShare, TrendDriver, DriverRole, CuratedPost,
};
pub use brand::{
    BrandUpdate, BrandUpdateKind, BrandUpdateDetail, BrandMilestone, MilestoneType,
    BrandFinancials, BrandNewsDetail, Revenue, RegionShare,
};
pub use hot_item::HotItem;
pub use keyword::{StyleKeyword, KeywordSource};
