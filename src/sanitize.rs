//! Icon-key to C++ identifier sanitization
//!
//! Upstream icon names are kebab-case and occasionally digit-leading
//! ("arrow-left", "500px") or collide with a reserved word ("class").
//! The rule is deliberately minimal: swap hyphens for underscores, and
//! prepend a single underscore when the *original* key starts with a digit
//! or sits in the reserved set. Two distinct keys that normalize to the
//! same identifier are not rejected here; the collator logs them.

use std::collections::HashSet;

/// Turn one raw glyph key into a legal C++ enumerator name.
///
/// `key` must be non-empty. The reserved check runs against the original
/// key, not the hyphen-substituted form, so a key like `and-eq` keeps its
/// plain spelling even though it normalizes to the keyword `and_eq`.
pub fn sanitize(key: &str, reserved: &HashSet<&str>) -> String {
    let base = key.replace('-', "_");

    let needs_prefix = key
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
        || reserved.contains(key);

    if needs_prefix {
        format!("_{}", base)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::reserved_set;

    fn is_legal_identifier(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    #[test]
    fn test_hyphen_mapping() {
        assert_eq!(sanitize("arrow-left", &HashSet::new()), "arrow_left");
    }

    #[test]
    fn test_digit_leading_avoidance() {
        assert_eq!(sanitize("100-percent", &HashSet::new()), "_100_percent");
        assert_eq!(sanitize("500px", &HashSet::new()), "_500px");
    }

    #[test]
    fn test_keyword_avoidance() {
        let reserved = reserved_set(&[]);
        assert_eq!(sanitize("class", &reserved), "_class");
        assert_eq!(sanitize("delete", &reserved), "_delete");
    }

    #[test]
    fn test_extra_reserved_words() {
        let reserved = reserved_set(&["bootstrap"]);
        assert_eq!(sanitize("bootstrap", &reserved), "_bootstrap");
    }

    #[test]
    fn test_reserved_check_uses_original_key() {
        let reserved = reserved_set(&[]);
        assert_eq!(sanitize("and-eq", &reserved), "and_eq");
    }

    #[test]
    fn test_totality_over_representative_keys() {
        let reserved = reserved_set(&["linux", "bootstrap"]);
        for key in [
            "wifi",
            "arrow-left",
            "500px",
            "class",
            "battery-three-quarters",
            "0-circle-fill",
            "linux",
            "a",
        ] {
            let ident = sanitize(key, &reserved);
            assert!(
                is_legal_identifier(&ident),
                "{:?} -> {:?} is not a legal identifier",
                key,
                ident
            );
        }
    }
}
