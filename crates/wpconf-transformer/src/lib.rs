//! wpconf Transformer
//!
//! Checks, adds, updates and removes constant and variable declarations in a
//! `wp-config.php` style file while leaving every other byte alone.
//!
//! # Core Operations
//!
//! - **exists** / **get_value**: inspect one declaration
//! - **add**: insert a canonical declaration at an anchor comment
//! - **update**: swap a declaration's value, or regenerate it canonically
//! - **remove**: delete a declaration and its line break
//!
//! # Architecture
//!
//! ```text
//! File → Snapshot → scan() → DeclarationMap → edit → Snapshot::save() → File
//!                                                        (fd-lock, skipped if unchanged)
//! ```
//!
//! Mutations report `Ok(false)` when there was nothing to do and an error
//! only when the operation failed.
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use wpconf_transformer::{ConfigTransformer, Kind};
//!
//! # fn example() -> Result<(), wpconf_transformer::TransformerError> {
//! let transformer = ConfigTransformer::new("wp-config.php")?;
//!
//! if !transformer.exists(Kind::Constant, "WP_DEBUG")? {
//!     transformer.add(Kind::Constant, "WP_DEBUG", &json!(true), &transformer.add_options())?;
//! }
//!
//! let options = transformer.update_options().with_normalize(true);
//! transformer.update(Kind::Constant, "WP_DEBUG", &json!(false), &options)?;
//! transformer.remove(Kind::Variable, "table_prefix")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod persist;
pub mod transformer;

// Re-exports for convenience
pub use config::{AddOptions, Placement, TransformerConfig, UpdateOptions, DEFAULT_ANCHOR, DEFAULT_SEPARATOR};
pub use error::{TransformerError, TransformerResult};
pub use persist::Snapshot;
pub use transformer::ConfigTransformer;
pub use wpconf_dialect::{Declaration, DeclarationMap, Kind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the transformer
    pub use crate::config::{AddOptions, Placement, TransformerConfig, UpdateOptions};
    pub use crate::error::{TransformerError, TransformerResult};
    pub use crate::transformer::ConfigTransformer;
    pub use wpconf_dialect::Kind;
}
