//! Error types for the declaration dialect

/// Errors raised while interpreting dialect input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// Declaration kind is neither `constant` nor `variable`
    #[error("unknown declaration kind: '{0}'")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_display() {
        let err = DialectError::UnknownKind("global".to_string());
        assert_eq!(err.to_string(), "unknown declaration kind: 'global'");
    }
}
