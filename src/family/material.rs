//! Material Icons adapter (line-oriented)
//!
//! Each style variant ships its own `.codepoints` file: one
//! `key codepoint` pair per line, whitespace-separated, code point as bare
//! hex. Every variant drives a full emission of its own artifact pair
//! (`material_<variant>.h/.cpp`, namespace `md::<variant>`); the fonts
//! enum holds the single placeholder constant `font`.

use std::path::Path;

use crate::collate::{collate, CodePointSource};
use crate::config::Config;
use crate::emit::{self, GenerationSpec};
use crate::error::{GenError, Result};
use crate::fetch;
use crate::keywords::{reserved_set, DEFAULT_EXTRA_RESERVED};

const FONT_VARIANTS: &[&str] = &["font"];

/// (variant name, upstream file-name suffix)
const VARIANTS: &[(&str, &str)] = &[
    ("regular", ""),
    ("outlined", "Outlined"),
    ("round", "Round"),
    ("sharp", "Sharp"),
    ("twotone", "TwoTone"),
];

pub fn generate(local: Option<&Path>, config: &Config) -> Result<()> {
    for (variant, suffix) in VARIANTS {
        let file_name = format!("MaterialIcons{}-Regular.codepoints", suffix);
        let text = match local {
            // Local source is a directory holding the per-variant files.
            Some(dir) => fetch::read_local(&dir.join(&file_name))?,
            None => fetch::http_get(&config.material_url(suffix))?,
        };

        let raw = parse_codepoints(&text)?;
        let reserved = reserved_set(DEFAULT_EXTRA_RESERVED);
        let spec = GenerationSpec {
            base_name: format!("material_{}", variant),
            namespace: format!("md::{}", variant),
            font_variants: FONT_VARIANTS.iter().map(|s| s.to_string()).collect(),
            entries: collate(raw, &reserved),
        };
        emit::write_artifacts(&spec, Path::new(&config.output.dir))?;
    }
    Ok(())
}

/// Parse a `.codepoints` blob into a raw mapping.
///
/// Empty lines are skipped; any line that does not split into exactly two
/// tokens fails the whole fetch.
fn parse_codepoints(text: &str) -> Result<Vec<(String, CodePointSource)>> {
    let mut raw = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(GenError::malformed(
                line,
                format!("expected `key codepoint`, got {} tokens", tokens.len()),
            ));
        }
        raw.push((
            tokens[0].to_string(),
            CodePointSource::Hex(tokens[1].to_string()),
        ));
    }
    Ok(raw)
}
