use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::error::Result;
use crate::types::{RawStoreData, StoreApi, StoreRecord};

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub api_name: String,
    pub total_raw: usize,
    pub total_records: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Map a single raw vendor entry into common records. `None` means the
    /// spider chose to skip it.
    #[instrument(skip(api, raw_store), fields(api_name = %api.api_name()))]
    fn process_store(
        api: &dyn StoreApi,
        raw_store: &RawStoreData,
    ) -> Result<Option<Vec<StoreRecord>>> {
        let (should_skip, skip_reason) = api.should_skip(raw_store);
        if should_skip {
            debug!("Skipping store: {}", skip_reason);
            return Ok(None);
        }

        let records = api.get_store_records(raw_store)?;
        Ok(Some(records))
    }

    /// Run the complete pipeline for a given spider: fetch once, map every
    /// raw entry independently, and dump the records as NDJSON. A mapping
    /// failure on one store is collected as an error and never aborts the
    /// batch.
    #[instrument(skip(api), fields(api_name = %api.api_name()))]
    pub async fn run_for_api(api: Box<dyn StoreApi>, output_dir: &str) -> Result<PipelineResult> {
        let api_name = api.api_name().to_string();
        info!("🚀 Starting pipeline for {}", api_name);

        info!("📡 Fetching stores from {}...", api_name);
        let raw_stores = api.get_store_list().await?;
        info!("✅ Fetched {} raw store entries", raw_stores.len());

        let mut records = Vec::new();
        let mut errors = Vec::new();
        let mut skipped = 0;

        for (i, raw_store) in raw_stores.iter().enumerate() {
            match Self::process_store(&*api, raw_store) {
                Ok(Some(mapped)) => records.extend(mapped),
                Ok(None) => skipped += 1,
                Err(e) => {
                    error!("Mapping failed for store {}: {}", i, e);
                    errors.push(format!("Failed to map store {i}: {e}"));
                }
            }
        }

        info!(
            "✅ Mapped {} records ({} skipped, {} errors)",
            records.len(),
            skipped,
            errors.len()
        );

        let output_file = Self::write_records(&api_name, &records, output_dir)?;

        Ok(PipelineResult {
            api_name,
            total_raw: raw_stores.len(),
            total_records: records.len(),
            skipped,
            errors,
            output_file,
        })
    }

    /// Write records as newline-delimited JSON to `<dir>/<api>_stores.ndjson`
    fn write_records(api_name: &str, records: &[StoreRecord], output_dir: &str) -> Result<String> {
        fs::create_dir_all(output_dir)?;
        let output_path = Path::new(output_dir).join(format!("{api_name}_stores.ndjson"));

        let mut out = String::new();
        for record in records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        fs::write(&output_path, out)?;

        info!("💾 Wrote {} records to {}", records.len(), output_path.display());
        Ok(output_path.display().to_string())
    }
}
