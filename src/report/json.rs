use std::error::Error;
use std::fs;
use std::path::Path;

use crate::metrics::ProjectMetrics;

/// Write the full project record as pretty-printed JSON.
///
/// Every field is serialized; reading the file back reproduces the record
/// exactly.
pub fn write(metrics: &ProjectMetrics, path: &Path) -> Result<(), Box<dyn Error>> {
    let payload = serde_json::to_string_pretty(metrics)?;
    fs::write(path, payload)?;
    log::info!("JSON metrics saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;
