use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::{POUNDLAND_API, POUNDLAND_LOCATOR_URL};
use crate::dict_parser::DictParser;
use crate::error::{Result, ScraperError};
use crate::hours::{OpeningHours, TimeOfDay, Weekday};
use crate::types::{RawStoreData, StoreApi, StoreRecord};

const POUNDLAND_BRAND: (&str, &str) = ("Poundland", "Q1434528");
const PEP_BRAND: (&str, &str) = ("Pep&Co", "Q24908166");

/// Spider for the Poundland REST locator. A single oversized page covers
/// the whole estate, and stores flagged as Pep&Co shop-in-shops emit a
/// second co-located record.
pub struct PoundlandSpider {
    client: reqwest::Client,
}

impl PoundlandSpider {
    pub fn new(_config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fold the vendor's per-day `{day, hours}` rules into a schedule.
    /// "Closed" days contribute no interval, and a rule that will not
    /// parse is dropped without touching the rest.
    fn parse_hours(rules: &[RawStoreData]) -> OpeningHours {
        let mut hours = OpeningHours::new();
        for rule in rules {
            let (Some(day_token), Some(times)) = (rule["day"].as_str(), rule["hours"].as_str())
            else {
                debug!("opening_hours rule missing day or hours");
                continue;
            };
            let day = match Weekday::from_token(day_token) {
                Ok(day) => day,
                Err(err) => {
                    debug!(%err, "skipping opening_hours rule");
                    continue;
                }
            };
            if times.trim().eq_ignore_ascii_case("closed") {
                hours.set_closed(day);
                continue;
            }
            let Some((open_text, close_text)) = times.split_once('-') else {
                debug!(times, "opening_hours rule has no open-close separator");
                continue;
            };
            match (TimeOfDay::parse(open_text), TimeOfDay::parse(close_text)) {
                (Ok(open), Ok(close)) => hours.add_range(day, open, close),
                (Err(err), _) | (_, Err(err)) => debug!(%err, "skipping opening_hours rule"),
            }
        }
        hours
    }
}

#[async_trait::async_trait]
impl StoreApi for PoundlandSpider {
    fn api_name(&self) -> &'static str {
        POUNDLAND_API
    }

    #[instrument(skip(self))]
    async fn get_store_list(&self) -> Result<Vec<RawStoreData>> {
        // One page_size=10000 request covers the estate; revisit paging if
        // the locations count ever approaches that.
        let data: serde_json::Value = self
            .client
            .get(POUNDLAND_LOCATOR_URL)
            .header("Accept", "application/json")
            .send()
            .await?
            .json()
            .await?;

        let stores = data["locations"]
            .as_array()
            .ok_or_else(|| ScraperError::MissingField("locations not found".into()))?
            .clone();
        info!("Fetched {} Poundland locations", stores.len());
        Ok(stores)
    }

    fn get_store_records(&self, raw_data: &RawStoreData) -> Result<Vec<StoreRecord>> {
        let mut item = DictParser::parse(raw_data);

        // "store_id" is a more stable ref than "id"
        let store_ref = raw_data["store_id"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ScraperError::MissingField("store_id not found".into()))?;
        item.website = Some(format!(
            "https://www.poundland.co.uk/store-finder/store_page/view/id/{store_ref}/"
        ));
        item.store_ref = store_ref;
        item.brand = Some(POUNDLAND_BRAND.0.to_string());
        item.brand_wikidata = Some(POUNDLAND_BRAND.1.to_string());

        if let Some(rules) = raw_data["opening_hours"].as_array() {
            let hours = Self::parse_hours(rules);
            if !hours.is_empty() {
                item.opening_hours = Some(hours.as_opening_hours());
            }
        }

        let flag = |key: &str| {
            if raw_data[key].as_str() == Some("1") {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        };
        item.extras.insert("atm".to_string(), flag("atm"));
        item.extras.insert("icestore".to_string(), flag("icestore"));

        if raw_data["is_pep_co_only"].as_str() == Some("1") {
            item.brand = Some(PEP_BRAND.0.to_string());
            item.brand_wikidata = Some(PEP_BRAND.1.to_string());
            return Ok(vec![item]);
        }

        let mut records = Vec::new();
        if raw_data["pepshopinshop"].as_str() == Some("1") {
            // Pep and Poundland share this location
            let mut pep = item.clone();
            pep.store_ref = format!("{}_pep", item.store_ref);
            pep.brand = Some(PEP_BRAND.0.to_string());
            pep.brand_wikidata = Some(PEP_BRAND.1.to_string());
            pep.located_in = Some(POUNDLAND_BRAND.0.to_string());
            pep.located_in_wikidata = Some(POUNDLAND_BRAND.1.to_string());
            records.push(pep);
        }
        records.push(item);
        Ok(records)
    }
}
