use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw store data as returned from vendor locator APIs
pub type RawStoreData = serde_json::Value;

/// The common output record every spider maps vendor JSON into.
///
/// Optional fields are omitted from serialized output when absent; in
/// particular `opening_hours` is only set when the hours core produced a
/// non-empty schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Vendor-scoped stable identifier, used downstream for dedup
    #[serde(rename = "ref")]
    pub store_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_wikidata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Canonical compact notation from the hours core
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    /// Brand of the host store for shop-in-shop locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located_in_wikidata: Option<String>,
    /// Vendor-specific attributes that have no dedicated field
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

/// Core trait that all store-locator data sources must implement
#[async_trait::async_trait]
pub trait StoreApi: Send + Sync {
    /// Unique identifier for this spider
    fn api_name(&self) -> &'static str;

    /// Fetch all raw store entries from this vendor's locator endpoint
    async fn get_store_list(&self) -> Result<Vec<RawStoreData>>;

    /// Map one raw vendor entry into common records. Usually one record;
    /// shop-in-shop locations may produce a second co-located record.
    fn get_store_records(&self, raw_data: &RawStoreData) -> Result<Vec<StoreRecord>>;

    /// Determine if a raw entry should be skipped before mapping
    fn should_skip(&self, _raw_data: &RawStoreData) -> (bool, String) {
        (false, String::new())
    }
}
