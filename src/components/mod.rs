//! UI Components
//!
//! Dashboard sections, detail modals and the small pieces they share.

mod modal;
mod favorite_toggle;
mod collapsible_card;
mod trending_section;
mod trend_detail_modal;
mod brand_updates_section;
mod brand_detail_modal;
mod milestone_timeline;
mod hot_items_section;
mod hot_items_modal;
mod style_word_cloud;
mod favorites_panel;
mod daily_briefing;
mod today_angle;

pub use modal::{Modal, ModalCloseButton};
pub use favorite_toggle::FavoriteToggle;
pub use collapsible_card::CollapsibleCard;
pub use trending_section::TrendingSection;
pub use trend_detail_modal::TrendDetailModal;
pub use brand_updates_section::BrandUpdatesSection;
pub use brand_detail_modal::BrandDetailModal;
pub use milestone_timeline::MilestoneTimeline;
pub use hot_items_section::{HotItemCard, HotItemsSection};
pub use hot_items_modal::HotItemsModal;
pub use style_word_cloud::StyleWordCloud;
pub use favorites_panel::FavoritesPanel;
pub use daily_briefing::DailyBriefing;
pub use today_angle::TodayAngle;
