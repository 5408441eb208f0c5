use serde_json::Value;

use crate::types::StoreRecord;

/// Best-effort extraction of the common record fields from arbitrary vendor
/// JSON, by trying a fixed list of key spellings per field. Spiders start
/// from this and then patch the fields the vendor encodes unusually.
pub struct DictParser;

impl DictParser {
    pub fn parse(data: &Value) -> StoreRecord {
        let mut record = StoreRecord {
            store_ref: first_string(data, &["ref", "id", "store_id", "storeID", "StoreID"])
                .unwrap_or_default(),
            name: first_string(data, &["name", "store_name", "storeName", "title"]),
            lat: first_f64(data, &["lat", "latitude", "Latitude"]),
            lon: first_f64(data, &["lon", "lng", "long", "longitude", "Longitude"]),
            city: first_string(data, &["city", "town", "locality"]),
            state: first_string(data, &["state", "province", "region"]),
            postcode: first_string(data, &["postcode", "post_code", "postal_code", "zip", "zipcode"]),
            country: first_string(data, &["country", "country_code"]),
            phone: first_string(data, &["phone", "telephone", "phone_number", "contact_number"]),
            website: first_string(data, &["website", "url", "store_url"]),
            ..StoreRecord::default()
        };

        // Address is either a flat string or a nested object carrying the
        // street line plus the locality fields.
        match data.get("address") {
            Some(Value::String(addr)) => record.addr_full = Some(addr.trim().to_string()),
            Some(addr @ Value::Object(_)) => {
                record.addr_full =
                    first_string(addr, &["address", "street", "street_address", "line1"]);
                if record.city.is_none() {
                    record.city = first_string(addr, &["city", "town", "locality"]);
                }
                if record.postcode.is_none() {
                    record.postcode =
                        first_string(addr, &["postcode", "post_code", "postal_code", "zip"]);
                }
            }
            _ => {
                record.addr_full =
                    first_string(data, &["addr_full", "street_address", "street", "address1"]);
            }
        }

        record
    }
}

/// First present key, as a trimmed string. Numeric values are accepted too,
/// since vendors flip-flop between `"id": 42` and `"id": "42"`.
fn first_string(data: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match data.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// First present key, as an f64. String-encoded numbers are common in
/// locator feeds and are parsed as well.
fn first_f64(data: &Value, keys: &[&str]) -> Option<f64> {
    for key in keys {
        match data.get(key) {
            Some(Value::Number(n)) => return n.as_f64(),
            Some(Value::String(s)) => {
                if let Ok(parsed) = s.trim().parse::<f64>() {
                    return Some(parsed);
                }
            }
            _ => {}
        }
    }
    None
}
