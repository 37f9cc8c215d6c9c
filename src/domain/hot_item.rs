//! Hot Item Entity
//!
//! A best-selling product card.

#[derive(Debug, Clone, PartialEq)]
pub struct HotItem {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    pub image_url: String,
    pub buy_link: String,
    pub score: u32,
}
