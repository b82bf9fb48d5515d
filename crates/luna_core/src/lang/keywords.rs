//! Define the reserved keyword vocabulary for the Luna language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! token-dump names and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; lookup via [`from_dump_name`] is not.
//! - `unless` and `until` are spelled differently from `if` and `while` but the grammar treats each
//!   pair identically. Whether they negate their condition is up to whoever consumes the parse.
//!
//! ## Examples
//! ```rust
//! use luna_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::dump_name(KeywordId::Else), "ELSE");
//! assert_eq!(keywords::from_dump_name("while"), Some(KeywordId::While));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    If,
    Unless,
    Else,
    While,
    Until,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; statement dispatch in the parser is keyed on [`KeywordId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Starts (or continues) a conditional chain.
    Conditional,
    /// Starts a loop.
    Loop,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the source spelling.
/// - `dump_name` is the upper-case name used in token listings.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub dump_name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", "IF", KeywordCategory::Conditional),
    info(KeywordId::Unless, "unless", "UNLESS", KeywordCategory::Conditional),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::Conditional),
    info(KeywordId::While, "while", "WHILE", KeywordCategory::Loop),
    info(KeywordId::Until, "until", "UNTIL", KeywordCategory::Loop),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Upper-case token-dump name.
pub fn dump_name(id: KeywordId) -> &'static str {
    info_for(id).dump_name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Registry entry for `id`.
///
/// ## Notes
/// - The match is exhaustive, so adding a [`KeywordId`] without a table row fails to compile here
///   rather than at lookup time.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    let index = match id {
        KeywordId::If => 0,
        KeywordId::Unless => 1,
        KeywordId::Else => 2,
        KeywordId::While => 3,
        KeywordId::Until => 4,
    };
    &KEYWORDS[index]
}

/// Lookup by source spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Lookup by token-dump name, ignoring ASCII case.
pub fn from_dump_name(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.dump_name.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    dump_name: &'static str,
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        dump_name,
        category,
    }
}
