//! wpconf Dialect
//!
//! The restricted declaration dialect of `wp-config.php` style files, without
//! a full language parser.
//!
//! # Core Concepts
//!
//! - [`Kind`]: the two declaration forms, constants and variables
//! - [`scan`]: pattern-based extraction of a [`DeclarationMap`] from text
//! - [`render`]: value codec producing literal source text from a [`serde_json::Value`]
//! - [`normalize`]: canonical one-line declaration text for a kind
//!
//! # Supported Grammar
//!
//! ```text
//! define( 'NAME', VALUE );     constant, one line, `define` is case-insensitive
//! $NAME = VALUE;               variable, one line
//! ```
//!
//! Values spanning several lines (multi-line arrays, heredocs) are not
//! recognised. Such declarations are simply absent from the scan result.
//!
//! # Example
//!
//! ```
//! use wpconf_dialect::{normalize, render, scan, Kind};
//! use serde_json::json;
//!
//! let map = scan("define('WP_DEBUG', false);\n$table_prefix = 'wp_';\n");
//! assert!(map.get(Kind::Constant, "WP_DEBUG").is_some());
//!
//! let text = normalize(Kind::Constant, "WP_DEBUG", &render(&json!(true), false));
//! assert_eq!(text, "define( 'WP_DEBUG', true );");
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod codec;
mod error;
mod kind;
mod normalize;
mod scanner;

// Re-exports
pub use codec::render;
pub use error::DialectError;
pub use kind::Kind;
pub use normalize::normalize;
pub use scanner::{scan, Declaration, DeclarationMap, Lookup};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
