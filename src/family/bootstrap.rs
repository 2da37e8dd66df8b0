//! Bootstrap Icons adapter (numeric catalog)
//!
//! Metadata is a JSON object mapping icon name directly to the integer
//! code point. Single style, so the fonts enum carries one constant named
//! after the family itself (which is why `bootstrap` sits in the reserved
//! extras: an icon of the same name must not shadow the constant).

use std::path::Path;

use crate::collate::{collate, CodePointSource};
use crate::config::Config;
use crate::emit::{self, GenerationSpec};
use crate::error::{GenError, Result};
use crate::fetch;
use crate::keywords::{reserved_set, DEFAULT_EXTRA_RESERVED};

const BASE_NAME: &str = "bootstrap";
const NAMESPACE: &str = "bs";
const FONT_VARIANTS: &[&str] = &["bootstrap"];

pub fn generate(local: Option<&Path>, config: &Config) -> Result<()> {
    let text = match local {
        Some(path) => fetch::read_local(path)?,
        None => fetch::http_get(&config.sources.bootstrap)?,
    };

    let raw = parse_catalog(&text)?;
    let reserved = reserved_set(DEFAULT_EXTRA_RESERVED);
    let spec = GenerationSpec {
        base_name: BASE_NAME.to_string(),
        namespace: NAMESPACE.to_string(),
        font_variants: FONT_VARIANTS.iter().map(|s| s.to_string()).collect(),
        entries: collate(raw, &reserved),
    };
    emit::write_artifacts(&spec, Path::new(&config.output.dir))
}

/// Parse the numeric-catalog JSON into a raw mapping.
fn parse_catalog(text: &str) -> Result<Vec<(String, CodePointSource)>> {
    let doc: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GenError::unavailable("bootstrap metadata JSON", e))?;
    let obj = doc
        .as_object()
        .ok_or_else(|| GenError::malformed("<document>", "expected a top-level JSON object"))?;

    let mut raw = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        let code = value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| GenError::malformed(key.clone(), "code point is not an integer"))?;
        raw.push((key.clone(), CodePointSource::Scalar(code)));
    }
    Ok(raw)
}
