use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScraperError};

/// Load the (latitude, longitude) sample points used to sweep a
/// radius-search locator endpoint across a country. One CSV per country
/// grid, one `lat,lon` pair per line; `#` comment lines and blanks are
/// ignored, malformed lines are skipped with a debug log.
pub fn point_locations(path: impl AsRef<Path>) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        ScraperError::Config(format!(
            "Failed to read searchable points file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut points = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(',') {
            Some((lat, lon)) => {
                match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
                    (Ok(lat), Ok(lon)) => points.push((lat, lon)),
                    _ => debug!(line, "skipping unparseable sample point"),
                }
            }
            None => debug!(line, "skipping malformed sample point line"),
        }
    }
    Ok(points)
}
