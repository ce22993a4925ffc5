use thiserror::Error;

/// Errors from strict parsing of rule keys and from out-of-range tuning values.
///
/// Lookups never produce these; they fall back to `DEFAULT` entries instead.
/// Only callers that ask for strict parsing (config files, CLI flags) see them.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A country key is neither a two-letter uppercase code nor `DEFAULT`.
    #[error("{field} ('{value}') is not a country key")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A transport label outside `air`, `bus`, `ship`, `train` and `car`.
    #[error("unknown transport mode '{0}'")]
    UnknownTransportMode(String),
    /// A rate, weight or window is negative or not finite.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Config field, in its JSON spelling.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
