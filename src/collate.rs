//! Entry collation
//!
//! Assembles (raw key, identifier, code point) triples from a family's raw
//! mapping and sorts them into the stable order both artifacts are emitted
//! in. Sorting is by raw key, not by derived identifier: the output order
//! then depends only on source data, so regenerated artifacts stay
//! diff-friendly even if the sanitizer rule ever changes.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::sanitize::sanitize;

/// One code-point value as delivered by a family adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodePointSource {
    /// Bare hex text as published upstream (e.g. `"f26e"`). Passed through
    /// with a `0x` prefix, no case folding and no validation.
    Hex(String),
    /// Numeric code point (numeric-catalog families).
    Scalar(u32),
}

/// One collated entry: the raw upstream key, the sanitized identifier, and
/// the normalized `0x…` code-point literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatedEntry {
    pub key: String,
    pub ident: String,
    pub code_point: String,
}

/// Normalize a code-point source to a `0x`-prefixed hex literal.
pub fn normalize_hex(source: &CodePointSource) -> String {
    match source {
        CodePointSource::Hex(s) => format!("0x{}", s),
        CodePointSource::Scalar(n) => format!("{:#x}", n),
    }
}

/// Sanitize and sort a raw mapping.
///
/// Keys are unique within one family's mapping, so the sort has no ties.
/// Distinct keys whose identifiers collide (e.g. `a-b` and `a_b`) are kept
/// as-is; the resulting artifact will not compile downstream, so the
/// condition is logged, but emission itself stays permissive.
pub fn collate(
    raw: Vec<(String, CodePointSource)>,
    reserved: &HashSet<&str>,
) -> Vec<CollatedEntry> {
    let mut entries: Vec<CollatedEntry> = raw
        .into_iter()
        .map(|(key, source)| {
            let ident = sanitize(&key, reserved);
            let code_point = normalize_hex(&source);
            CollatedEntry {
                key,
                ident,
                code_point,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.key.cmp(&b.key));

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for entry in &entries {
        if let Some(prev) = seen.insert(entry.ident.as_str(), entry.key.as_str()) {
            warn!(
                "identifier collision: {:?} and {:?} both sanitize to {:?}",
                prev, entry.key, entry.ident
            );
        }
    }

    entries
}
