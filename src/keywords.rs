//! C++ reserved words
//!
//! The generated headers declare each icon as a bare enumerator, so every
//! identifier has to dodge the full C++ keyword set plus the preprocessor
//! directive tokens (an enumerator named `define` would survive the
//! compiler but not a `#define`-happy include chain).
//!
//! The set is always passed to the sanitizer explicitly; callers append
//! their own context-specific words (platform macros, font-family labels)
//! via [`reserved_set`].

use std::collections::HashSet;

/// C++ keywords, alternative tokens, and preprocessor directive tokens.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "atomic_cancel",
    "atomic_commit",
    "atomic_noexcept",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char8_t",
    "char16_t",
    "char32_t",
    "class",
    "compl",
    "concept",
    "const",
    "consteval",
    "constexpr",
    "constinit",
    "const_cast",
    "continue",
    "co_await",
    "co_return",
    "co_yield",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "reflexpr",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "synchronized",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
    "final",
    "override",
    "transaction_safe",
    "transaction_safe_dynamic",
    "import",
    "module",
    // Preprocessor directive tokens
    "elif",
    "endif",
    "ifdef",
    "ifndef",
    "define",
    "undef",
    "include",
    "line",
    "error",
    "pragma",
    "defined",
    "__has_include",
    "__has_cpp_attribute",
];

/// Extra words every artifact currently reserves on top of the language
/// set: `linux` is a predefined macro under gcc on Linux, `bootstrap` is
/// the font-variant constant of the Bootstrap family.
pub const DEFAULT_EXTRA_RESERVED: &[&str] = &["linux", "bootstrap"];

/// Build the reserved set for one artifact: language keywords plus
/// caller-supplied extras.
pub fn reserved_set<'a>(extra: &[&'a str]) -> HashSet<&'a str> {
    let mut set: HashSet<&str> = CPP_KEYWORDS.iter().copied().collect();
    set.extend(extra.iter().copied());
    set
}
