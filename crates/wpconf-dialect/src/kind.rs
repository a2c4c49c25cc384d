//! Declaration kinds

use crate::error::DialectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two supported declaration forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// `define( 'NAME', VALUE );`
    Constant,
    /// `$NAME = VALUE;`
    Variable,
}

impl Kind {
    /// All kinds, in scan order
    pub const ALL: [Kind; 2] = [Kind::Constant, Kind::Variable];

    /// Get the lowercase name used in configuration and messages
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Constant => "constant",
            Kind::Variable => "variable",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" => Ok(Kind::Constant),
            "variable" => Ok(Kind::Variable),
            _ => Err(DialectError::UnknownKind(s.to_string())),
        }
    }
}
