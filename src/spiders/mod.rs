pub mod poundland;
pub mod tjx;

use crate::config::Config;
use crate::constants;
use crate::types::StoreApi;

/// Build the spider registered under `api_name`, if any
pub fn create_spider(api_name: &str, config: &Config) -> Option<Box<dyn StoreApi>> {
    match api_name {
        constants::TJX_API => Some(Box::new(tjx::TjxSpider::new(config))),
        constants::POUNDLAND_API => Some(Box::new(poundland::PoundlandSpider::new(config))),
        _ => None,
    }
}
