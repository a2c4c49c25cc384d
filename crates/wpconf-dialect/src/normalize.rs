//! Canonical declaration rendering

use crate::kind::Kind;

/// Render the canonical one-line declaration for `kind`
///
/// `value` is literal source text, usually produced by [`crate::render`].
/// Unsupported kind names are rejected earlier, when parsing a [`Kind`].
///
/// # Examples
/// ```
/// # use wpconf_dialect::{normalize, Kind};
/// assert_eq!(normalize(Kind::Constant, "WP_DEBUG", "true"), "define( 'WP_DEBUG', true );");
/// assert_eq!(normalize(Kind::Variable, "table_prefix", "'wp_'"), "$table_prefix = 'wp_';");
/// ```
#[must_use]
pub fn normalize(kind: Kind, name: &str, value: &str) -> String {
    match kind {
        Kind::Constant => format!("define( '{name}', {value} );"),
        Kind::Variable => format!("${name} = {value};"),
    }
}
