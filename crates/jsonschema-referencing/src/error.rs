/// Errors that can occur while storing or resolving schema documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The registry has no document under the given (normalized) URI.
    #[error("Resource '{uri}' is not present in a registry")]
    NotFound { uri: String },
    /// A reference points to a resource the registry does not know.
    #[error("Reference '{reference}' cannot be resolved against '{scope}'")]
    Unresolvable { reference: String, scope: String },
    /// A JSON pointer fragment does not lead to any value.
    #[error("Pointer '{pointer}' does not exist within '{uri}'")]
    PointerToNowhere { pointer: String, uri: String },
    /// A plain-name fragment does not match any `$anchor`.
    #[error("Anchor '{anchor}' does not exist within '{uri}'")]
    NoSuchAnchor { anchor: String, uri: String },
    /// A reference chain re-entered a reference that is still being resolved.
    #[error("Reference '{reference}' forms a cycle: {}", .chain.join(" -> "))]
    CyclicReference {
        reference: String,
        chain: Vec<String>,
    },
}

impl Error {
    pub(crate) fn not_found(uri: impl Into<String>) -> Error {
        Error::NotFound { uri: uri.into() }
    }

    pub(crate) fn unresolvable(reference: impl Into<String>, scope: impl Into<String>) -> Error {
        Error::Unresolvable {
            reference: reference.into(),
            scope: scope.into(),
        }
    }

    pub(crate) fn pointer_to_nowhere(pointer: impl Into<String>, uri: impl Into<String>) -> Error {
        Error::PointerToNowhere {
            pointer: pointer.into(),
            uri: uri.into(),
        }
    }

    pub(crate) fn no_such_anchor(anchor: impl Into<String>, uri: impl Into<String>) -> Error {
        Error::NoSuchAnchor {
            anchor: anchor.into(),
            uri: uri.into(),
        }
    }

    pub(crate) fn cyclic_reference(reference: impl Into<String>, chain: Vec<String>) -> Error {
        Error::CyclicReference {
            reference: reference.into(),
            chain,
        }
    }

    /// Whether this error means the reference could not be found at all.
    ///
    /// Cycles are reported separately and return `false`.
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::Unresolvable { .. }
                | Error::PointerToNowhere { .. }
                | Error::NoSuchAnchor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn cycle_message_lists_the_chain() {
        let error = Error::cyclic_reference(
            "#/$defs/a",
            vec![
                "json-schema:///#/$defs/a".to_string(),
                "json-schema:///#/$defs/b".to_string(),
                "json-schema:///#/$defs/a".to_string(),
            ],
        );
        assert_eq!(
            error.to_string(),
            "Reference '#/$defs/a' forms a cycle: json-schema:///#/$defs/a -> json-schema:///#/$defs/b -> json-schema:///#/$defs/a"
        );
        assert!(!error.is_unresolvable());
    }

    #[test]
    fn not_found_is_unresolvable() {
        let error = Error::not_found("http://example.com/schema");
        assert_eq!(
            error.to_string(),
            "Resource 'http://example.com/schema' is not present in a registry"
        );
        assert!(error.is_unresolvable());
    }
}
