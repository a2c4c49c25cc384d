//! Transformer configuration and per-call options

use crate::error::TransformerResult;
use serde::{Deserialize, Serialize};

/// Default insertion anchor, the comment closing the editable section
pub const DEFAULT_ANCHOR: &str = "/* That's all, stop editing!";

/// Default text between an inserted declaration and the anchor
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Where `add` inserts relative to the anchor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Declaration, then separator, then anchor
    #[default]
    Before,
    /// Anchor, then separator, then declaration
    After,
}

/// Transformer-wide defaults
///
/// # Examples
/// ```
/// # use wpconf_transformer::{Placement, TransformerConfig};
/// let config = TransformerConfig::from_toml_str(r#"
///     anchor = "/* custom values */"
///     placement = "after"
/// "#).unwrap();
/// assert_eq!(config.placement, Placement::After);
/// assert_eq!(config.separator, "\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Text marking the insertion point for new declarations
    pub anchor: String,
    /// Text placed between a new declaration and the anchor
    pub separator: String,
    /// Insert before or after the anchor
    pub placement: Placement,
    /// Whether updates regenerate the canonical declaration by default
    pub normalize: bool,
}

impl TransformerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; missing keys take their defaults
    ///
    /// # Errors
    /// Returns `TransformerError::InvalidConfig` if the TOML is malformed
    pub fn from_toml_str(toml: &str) -> TransformerResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// With anchor text
    #[inline]
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// With separator text
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// With placement
    #[inline]
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// With default normalize flag for updates
    #[inline]
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            placement: Placement::Before,
            normalize: false,
        }
    }
}

/// Options for [`crate::ConfigTransformer::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOptions {
    /// Use a string value verbatim instead of quoting it
    pub raw: bool,
    /// Insertion anchor
    pub anchor: String,
    /// Insert before or after the anchor
    pub placement: Placement,
    /// Text between declaration and anchor
    pub separator: String,
}

impl AddOptions {
    /// With raw flag
    #[inline]
    #[must_use]
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// With anchor text
    #[inline]
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// With placement
    #[inline]
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// With separator text
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl From<&TransformerConfig> for AddOptions {
    fn from(config: &TransformerConfig) -> Self {
        Self {
            raw: false,
            anchor: config.anchor.clone(),
            placement: config.placement,
            separator: config.separator.clone(),
        }
    }
}

impl Default for AddOptions {
    fn default() -> Self {
        Self::from(&TransformerConfig::default())
    }
}

/// Options for [`crate::ConfigTransformer::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Use a string value verbatim instead of quoting it
    pub raw: bool,
    /// Regenerate the canonical declaration instead of swapping the value in place
    pub normalize: bool,
    /// Add the declaration when it is missing
    pub add_missing: bool,
}

impl UpdateOptions {
    /// With raw flag
    #[inline]
    #[must_use]
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// With normalize flag
    #[inline]
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// With add-missing flag
    #[inline]
    #[must_use]
    pub fn with_add_missing(mut self, add_missing: bool) -> Self {
        self.add_missing = add_missing;
        self
    }
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            raw: false,
            normalize: false,
            add_missing: true,
        }
    }
}
