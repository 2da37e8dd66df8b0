//! Artifact emission
//!
//! Renders the two generated C++ artifacts for one family/variant job:
//! - declaration header: include guard, `fonts`/`icons` enums inside the
//!   family namespace, forward declaration of the registration entry point
//! - registration unit: `register_<base>_names()` populating the icon
//!   engine's name tables
//!
//! Rendering is pure (string in, string out); [`write_artifacts`] is the
//! only place that touches the filesystem. Emitted text is a deterministic
//! function of the [`GenerationSpec`]: no timestamps, no map iteration
//! order, no randomness, so identical inputs produce byte-identical files.

use std::fs;
use std::path::Path;

use log::info;

use crate::collate::CollatedEntry;
use crate::error::{GenError, Result};

/// Header the registration unit includes for the external icon engine.
const ENGINE_HEADER: &str = "qfonticon.h";

const NOTICE: &str = "/**\n * This file has been automatically generated.\n */\n\n";

/// Everything one emission run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    /// Artifact base name; produces `<base>.h` / `<base>.cpp` and names
    /// the registration function `register_<base>_names`.
    pub base_name: String,
    /// C++ namespace the constants live in (may be nested, e.g. `md::round`).
    pub namespace: String,
    /// Font-variant constant names, emitted in order, values from 0.
    pub font_variants: Vec<String>,
    /// Collated icon entries, already sorted by raw key.
    pub entries: Vec<CollatedEntry>,
}

/// Render the declaration header (`<base>.h`).
pub fn render_declaration(spec: &GenerationSpec) -> String {
    let guard = format!("{}_H", spec.base_name.to_uppercase());
    let mut out = String::new();

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str(NOTICE);
    out.push_str(&format!("namespace {} {{\n\n", spec.namespace));

    out.push_str("namespace fonts {\nenum {\n    ");
    out.push_str(&spec.font_variants.join(",\n    "));
    out.push_str("\n};\n}\n\n");

    // Pad the identifier column to the widest identifier so the `=` signs
    // line up. Cosmetic only.
    let width = spec
        .entries
        .iter()
        .map(|e| e.ident.len())
        .max()
        .unwrap_or(0);

    out.push_str("namespace icons {\nenum {\n    ");
    let icon_lines: Vec<String> = spec
        .entries
        .iter()
        .map(|e| format!("{:<width$} = {}", e.ident, e.code_point, width = width))
        .collect();
    out.push_str(&icon_lines.join(",\n    "));
    out.push_str("\n};\n}\n\n");

    out.push_str(&format!("bool register_{}_names();\n\n", spec.base_name));
    out.push_str(&format!("}}\n\n#endif // {}\n", guard));

    out
}

/// Render the registration unit (`<base>.cpp`).
pub fn render_registration(spec: &GenerationSpec) -> String {
    let mut out = String::new();

    out.push_str(&format!("#include <{}.h>\n", spec.base_name));
    out.push_str(&format!("#include <{}>\n\n", ENGINE_HEADER));
    out.push_str(NOTICE);
    out.push_str(&format!("namespace {} {{\n\n", spec.namespace));

    out.push_str(&format!(
        "bool register_{}_names()\n{{\n    bool r = true;\n\n",
        spec.base_name
    ));

    out.push_str("    r &= QFontIconEngine::registerFontName({\n        ");
    let font_pairs: Vec<String> = spec
        .font_variants
        .iter()
        .map(|f| format!("{{ QStringLiteral(\"{}\"), fonts::{} }}", f, f))
        .collect();
    out.push_str(&font_pairs.join(",\n        "));
    out.push_str("\n    });\n\n");

    out.push_str("    r &= QFontIconEngine::registerIconName({\n        ");
    let icon_pairs: Vec<String> = spec
        .entries
        .iter()
        .map(|e| format!("{{ QStringLiteral(\"{}\"), icons::{} }}", e.key, e.ident))
        .collect();
    out.push_str(&icon_pairs.join(",\n        "));
    out.push_str("\n    });\n\n");

    out.push_str("    return r;\n}\n\n}\n");

    out
}

/// Write both artifacts into `out_dir`, overwriting unconditionally.
pub fn write_artifacts(spec: &GenerationSpec, out_dir: &Path) -> Result<()> {
    let header_path = out_dir.join(format!("{}.h", spec.base_name));
    let source_path = out_dir.join(format!("{}.cpp", spec.base_name));

    fs::write(&header_path, render_declaration(spec)).map_err(|e| GenError::WriteFailure {
        path: header_path.clone(),
        cause: e,
    })?;
    fs::write(&source_path, render_registration(spec)).map_err(|e| GenError::WriteFailure {
        path: source_path.clone(),
        cause: e,
    })?;

    info!(
        "Generated {} and {} ({} icons, {} font variants)",
        header_path.display(),
        source_path.display(),
        spec.entries.len(),
        spec.font_variants.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::{collate, CodePointSource};
    use crate::keywords::reserved_set;

    fn brands_spec() -> GenerationSpec {
        let reserved = reserved_set(&[]);
        let raw = vec![
            ("wifi".to_string(), CodePointSource::Hex("f1eb".into())),
            ("500px".to_string(), CodePointSource::Hex("f26e".into())),
        ];
        GenerationSpec {
            base_name: "awesome".to_string(),
            namespace: "fa".to_string(),
            font_variants: vec!["brands".to_string()],
            entries: collate(raw, &reserved),
        }
    }

    #[test]
    fn test_determinism() {
        let spec = brands_spec();
        assert_eq!(render_declaration(&spec), render_declaration(&spec));
        assert_eq!(render_registration(&spec), render_registration(&spec));
    }

    #[test]
    fn test_declaration_end_to_end() {
        let decl = render_declaration(&brands_spec());

        assert!(decl.starts_with("#ifndef AWESOME_H\n#define AWESOME_H\n"));
        assert!(decl.contains("This file has been automatically generated"));
        assert!(decl.contains("namespace fa {"));
        assert!(decl.contains("bool register_awesome_names();"));
        assert!(decl.ends_with("#endif // AWESOME_H\n"));

        // Sorted by raw key: "500px" < "wifi"; identifiers padded to the
        // widest ("_500px", 6 chars).
        let icons_at = decl.find("namespace icons").unwrap();
        let icons = &decl[icons_at..];
        assert!(icons.contains("_500px = 0xf26e,\n    wifi   = 0xf1eb\n"));

        // Variant position index 0 = first enumerator, no explicit value.
        assert!(decl.contains("namespace fonts {\nenum {\n    brands\n};\n}"));
    }

    #[test]
    fn test_registration_end_to_end() {
        let reg = render_registration(&brands_spec());

        assert!(reg.starts_with("#include <awesome.h>\n#include <qfonticon.h>\n"));
        assert!(reg.contains("bool register_awesome_names()\n{\n    bool r = true;"));
        assert!(reg.contains("{ QStringLiteral(\"brands\"), fonts::brands }"));
        // Icon pairs map the raw key, not the identifier, back to the constant.
        assert!(reg.contains("{ QStringLiteral(\"500px\"), icons::_500px }"));
        assert!(reg.contains("{ QStringLiteral(\"wifi\"), icons::wifi }"));
        assert!(reg.contains("    return r;\n}"));
        // Font registration comes before icon registration.
        assert!(reg.find("registerFontName").unwrap() < reg.find("registerIconName").unwrap());
    }

    #[test]
    fn test_registration_name_follows_base_name() {
        let mut spec = brands_spec();
        spec.base_name = "material_round".to_string();
        spec.namespace = "md::round".to_string();
        let reg = render_registration(&spec);
        assert!(reg.contains("#include <material_round.h>"));
        assert!(reg.contains("bool register_material_round_names()"));
        assert!(reg.contains("namespace md::round {"));
    }

    #[test]
    fn test_empty_mapping_renders_vacuous_icons_enum() {
        let mut spec = brands_spec();
        spec.entries.clear();
        let decl = render_declaration(&spec);
        assert!(decl.contains("namespace icons {"));
        assert_eq!(render_declaration(&spec), render_declaration(&spec));
    }

    #[test]
    fn test_variant_order_is_preserved() {
        let mut spec = brands_spec();
        spec.font_variants = vec![
            "solid".to_string(),
            "regular".to_string(),
            "light".to_string(),
            "brands".to_string(),
            "duotone".to_string(),
        ];
        let decl = render_declaration(&spec);
        assert!(decl.contains(
            "namespace fonts {\nenum {\n    solid,\n    regular,\n    light,\n    brands,\n    duotone\n};\n}"
        ));
    }

    #[test]
    fn test_write_artifacts_overwrites() {
        let dir = std::env::temp_dir().join("icongen_emit_test");
        std::fs::create_dir_all(&dir).unwrap();
        let spec = brands_spec();

        std::fs::write(dir.join("awesome.h"), "stale").unwrap();
        write_artifacts(&spec, &dir).unwrap();

        let header = std::fs::read_to_string(dir.join("awesome.h")).unwrap();
        assert_eq!(header, render_declaration(&spec));
        let source = std::fs::read_to_string(dir.join("awesome.cpp")).unwrap();
        assert_eq!(source, render_registration(&spec));
    }
}
