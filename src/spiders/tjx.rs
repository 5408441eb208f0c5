use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::{TJX_API, TJX_SEARCH_URL};
use crate::error::{Result, ScraperError};
use crate::geo::point_locations;
use crate::hours::{parse_weekly_text, DayAliases};
use crate::types::{RawStoreData, StoreApi, StoreRecord};

/// One retail chain reachable through the shared TJX locator endpoint.
struct Chain {
    code: &'static str,
    brand: &'static str,
    brand_wikidata: Option<&'static str>,
    /// Country whose sample grid surfaces this chain. `None` for chains
    /// whose own websites provide better data through dedicated spiders.
    country: Option<&'static str>,
}

const CHAINS: &[Chain] = &[
    // USA chains
    Chain {
        code: "08",
        brand: "TJ Maxx",
        brand_wikidata: Some("Q10860683"),
        country: Some("USA"),
    },
    Chain {
        code: "10",
        brand: "Marshalls",
        brand_wikidata: Some("Q15903261"),
        country: Some("USA"),
    },
    // Canada chains
    Chain {
        code: "90",
        brand: "HomeSense",
        brand_wikidata: Some("Q16844433"),
        country: Some("Canada"),
    },
    Chain {
        code: "91",
        brand: "Winners",
        brand_wikidata: Some("Q845257"),
        country: Some("Canada"),
    },
    Chain {
        code: "93",
        brand: "Marshalls",
        brand_wikidata: Some("Q15903261"),
        country: Some("Canada"),
    },
    // Not requested here, but the locator still returns them occasionally
    Chain {
        code: "28",
        brand: "Homegoods",
        brand_wikidata: None,
        country: None,
    },
    Chain {
        code: "50",
        brand: "Sierra",
        brand_wikidata: None,
        country: None,
    },
];

const COUNTRY_GRIDS: &[(&str, &str)] = &[
    ("USA", "us_centroids_50mile_radius.csv"),
    ("Canada", "ca_centroids_100mile_radius.csv"),
];

/// Spider for the shared TJX brands locator (TJ Maxx, Marshalls, Winners,
/// HomeSense). The endpoint is a radius search, so the spider sweeps a
/// per-country centroid grid and dedupes the overlap.
pub struct TjxSpider {
    client: reqwest::Client,
    points_dir: PathBuf,
    aliases: DayAliases,
}

impl TjxSpider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            points_dir: PathBuf::from(&config.points_dir),
            aliases: config.day_aliases_for(TJX_API),
        }
    }

    /// Comma-joined chain codes for one country's locator query
    fn chain_query(country: &str) -> String {
        CHAINS
            .iter()
            .filter(|chain| chain.country == Some(country))
            .map(|chain| chain.code)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn chain_for(code: &str) -> Option<&'static Chain> {
        CHAINS.iter().find(|chain| chain.code == code)
    }
}

/// String value of a field that vendors encode as either a string or a
/// bare number
fn field_string(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Coordinate fields come back string-encoded ("47.61") from this endpoint
fn field_f64(raw: &Value, key: &str) -> Result<f64> {
    match raw.get(key) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ScraperError::Api {
            message: format!("Failed to parse {key}: not a finite number"),
        }),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|e| ScraperError::Api {
            message: format!("Failed to parse {key}: {e}"),
        }),
        _ => Err(ScraperError::MissingField(format!("{key} not found"))),
    }
}

#[async_trait::async_trait]
impl StoreApi for TjxSpider {
    fn api_name(&self) -> &'static str {
        TJX_API
    }

    #[instrument(skip(self))]
    async fn get_store_list(&self) -> Result<Vec<RawStoreData>> {
        let mut seen = HashSet::new();
        let mut all_stores = Vec::new();

        for (country, grid_file) in COUNTRY_GRIDS {
            let chains = Self::chain_query(country);
            let points = point_locations(self.points_dir.join(grid_file))?;
            info!(
                "Sweeping {} sample points for {} (chains {})",
                points.len(),
                country,
                chains
            );

            for (lat, lon) in points {
                let lat_text = lat.to_string();
                let lon_text = lon.to_string();
                let form = [
                    ("chain", chains.as_str()),
                    ("lang", "en"),
                    ("maxstores", "100"),
                    ("geolat", lat_text.as_str()),
                    ("geolong", lon_text.as_str()),
                ];

                let data: Value = self
                    .client
                    .post(TJX_SEARCH_URL)
                    .form(&form)
                    .header("Accept", "application/json")
                    .send()
                    .await?
                    .json()
                    .await?;

                let Some(stores) = data["Stores"].as_array() else {
                    debug!(lat, lon, "no Stores array in locator response");
                    continue;
                };
                for store in stores {
                    // Adjacent sample radii overlap; keep each store once
                    let key = format!(
                        "{}{}",
                        field_string(store, "Chain").unwrap_or_default(),
                        field_string(store, "StoreID").unwrap_or_default()
                    );
                    if seen.insert(key) {
                        all_stores.push(store.clone());
                    }
                }
            }
        }

        info!("Fetched {} unique TJX stores", all_stores.len());
        Ok(all_stores)
    }

    fn get_store_records(&self, raw_data: &RawStoreData) -> Result<Vec<StoreRecord>> {
        let name = raw_data["Name"]
            .as_str()
            .ok_or_else(|| ScraperError::MissingField("Name not found".into()))?;
        let chain_code = field_string(raw_data, "Chain")
            .ok_or_else(|| ScraperError::MissingField("Chain not found".into()))?;
        let store_id = field_string(raw_data, "StoreID")
            .ok_or_else(|| ScraperError::MissingField("StoreID not found".into()))?;
        let chain = Self::chain_for(&chain_code);

        let mut record = StoreRecord {
            store_ref: format!("{chain_code}{store_id}"),
            name: Some(name.trim().to_string()),
            addr_full: raw_data["Address"].as_str().map(|s| s.trim().to_string()),
            city: field_string(raw_data, "City"),
            state: field_string(raw_data, "State"),
            postcode: field_string(raw_data, "Zip"),
            country: field_string(raw_data, "Country"),
            phone: field_string(raw_data, "Phone"),
            lat: Some(field_f64(raw_data, "Latitude")?),
            lon: Some(field_f64(raw_data, "Longitude")?),
            brand: chain.map(|c| c.brand.to_string()),
            brand_wikidata: chain.and_then(|c| c.brand_wikidata).map(str::to_string),
            ..StoreRecord::default()
        };

        if let Some(hours_text) = raw_data["Hours"].as_str() {
            let hours = parse_weekly_text(hours_text, &self.aliases);
            if !hours.is_empty() {
                record.opening_hours = Some(hours.as_opening_hours());
            }
        }

        Ok(vec![record])
    }
}
