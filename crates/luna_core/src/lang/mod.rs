//! Luna language vocabulary registries.
//!
//! The parser never compares keyword spellings; it compares [`keywords::KeywordId`]s. Spellings and
//! token-dump names live here so diagnostics, the dump reader and the CLI agree on them.
//!
//! ## Examples
//! ```rust
//! use luna_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("unless"), Some(KeywordId::Unless));
//! assert_eq!(keywords::as_str(KeywordId::Until), "until");
//! ```

pub mod keywords;
