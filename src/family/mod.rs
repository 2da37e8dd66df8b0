//! Icon family adapters
//!
//! One adapter per upstream icon set. All three feed the same
//! sanitize → collate → emit pipeline and differ only in how the raw
//! mapping is obtained and shaped:
//! - `awesome`   — glyph catalog: JSON object, code point in a named field
//! - `bootstrap` — numeric catalog: JSON object, key → integer
//! - `material`  — line-oriented: `key codepoint` text, one file per style

pub mod awesome;
pub mod bootstrap;
pub mod material;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Supported icon families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Awesome,
    Bootstrap,
    Material,
}

impl Family {
    pub fn parse(name: &str) -> Option<Family> {
        match name {
            "awesome" => Some(Family::Awesome),
            "bootstrap" => Some(Family::Bootstrap),
            "material" => Some(Family::Material),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Family::Awesome => "awesome",
            Family::Bootstrap => "bootstrap",
            Family::Material => "material",
        }
    }

    /// Run the full pipeline for this family: fetch (or read `local`),
    /// collate, and write the artifact pair(s) into the configured output
    /// directory. Material produces one pair per style variant.
    pub fn generate(&self, local: Option<&Path>, config: &Config) -> Result<()> {
        match self {
            Family::Awesome => awesome::generate(local, config),
            Family::Bootstrap => bootstrap::generate(local, config),
            Family::Material => material::generate(local, config),
        }
    }
}
