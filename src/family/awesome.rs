//! Font Awesome adapter (glyph catalog)
//!
//! Metadata is a JSON object keyed by icon name; each value is an object
//! carrying the code point as a bare hex string in its `unicode` field.
//! One artifact pair covers all five style variants, which share the icon
//! key space.

use std::path::Path;

use crate::collate::{collate, CodePointSource};
use crate::config::Config;
use crate::emit::{self, GenerationSpec};
use crate::error::{GenError, Result};
use crate::fetch;
use crate::keywords::{reserved_set, DEFAULT_EXTRA_RESERVED};

const BASE_NAME: &str = "awesome";
const NAMESPACE: &str = "fa";
const FONT_VARIANTS: &[&str] = &["solid", "regular", "light", "brands", "duotone"];

pub fn generate(local: Option<&Path>, config: &Config) -> Result<()> {
    let text = match local {
        Some(path) => fetch::read_local(path)?,
        None => fetch::http_get(&config.sources.awesome)?,
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

/// Parse the glyph-catalog JSON into a raw mapping.
fn parse_catalog(text: &str) -> Result<Vec<(String, CodePointSource)>> {
    let doc: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GenError::unavailable("awesome metadata JSON", e))?;
    let obj = doc
        .as_object()
        .ok_or_else(|| GenError::malformed("<document>", "expected a top-level JSON object"))?;

    let mut raw = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        let code = value
            .get("unicode")
            .and_then(|v| v.as_str())
            .ok_or_else(|| GenError::malformed(key.clone(), "missing \"unicode\" field"))?;
        raw.push((key.clone(), CodePointSource::Hex(code.to_string())));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"{
            "wifi":  { "unicode": "f1eb", "label": "WiFi" },
            "500px": { "unicode": "f26e" }
        }"#;
        let raw = parse_catalog(json).unwrap();
        assert_eq!(raw.len(), 2);
        assert!(raw.contains(&(
            "wifi".to_string(),
            CodePointSource::Hex("f1eb".to_string())
        )));
    }

    #[test]
    fn test_missing_unicode_field_is_malformed() {
        let json = r#"{ "wifi": { "label": "WiFi" } }"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(
            err,
            GenError::MalformedEntry { ref key, .. } if key == "wifi"
        ));
    }

    #[test]
    fn test_non_string_unicode_field_is_malformed() {
        let json = r#"{ "wifi": { "unicode": 61931 } }"#;
        assert!(matches!(
            parse_catalog(json).unwrap_err(),
            GenError::MalformedEntry { .. }
        ));
    }
}
