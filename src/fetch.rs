//! Metadata source acquisition
//!
//! Blocking, no retries. Either path maps its failures to
//! `SourceUnavailable` so the pipeline has a single fatal fetch error.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{GenError, Result};

/// Fetch a metadata document over HTTP. Non-2xx is a failure.
pub fn http_get(url: &str) -> Result<String> {
    debug!("GET {}", url);
    let response = reqwest::blocking::get(url).map_err(|e| GenError::unavailable(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenError::unavailable(url, format!("HTTP status {}", status)));
    }

    response.text().map_err(|e| GenError::unavailable(url, e))
}

/// Read a local metadata file.
pub fn read_local(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| GenError::unavailable(path.display().to_string(), e))
}
