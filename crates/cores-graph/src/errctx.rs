use cores_core::CoresError;

/// Adds a context key/value pair to whichever [`CoresError`] variant is
/// present, without the caller needing to match on the variant first.
pub(crate) trait CoresErrorExt {
    fn with_context(self, key: &str, value: impl ToString) -> Self;
}

impl CoresErrorExt for CoresError {
    fn with_context(self, key: &str, value: impl ToString) -> Self {
        match self {
            CoresError::Input(info) => CoresError::Input(info.with_context(key, value)),
            CoresError::Backend(info) => CoresError::Backend(info.with_context(key, value)),
            CoresError::Internal(info) => CoresError::Internal(info.with_context(key, value)),
        }
    }
}
