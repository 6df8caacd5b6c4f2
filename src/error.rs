use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Symbol sequences have different lengths.
    #[error("length mismatch: expected {expected} symbols, found {found}")]
    LengthMismatch {
        /// Length of the first sequence.
        expected: usize,
        /// Length of the second sequence.
        found: usize,
    },

    /// A mean was requested over zero points.
    #[error("mean of an empty point set is undefined")]
    UndefinedMean,

    /// Failure while reading delimited point data.
    #[error("import failed: {0}")]
    Csv(#[from] csv::Error),

    /// A field in delimited point data is not a number.
    #[error("invalid numeric field {value:?}: {source}")]
    Parse {
        /// The offending field text.
        value: String,
        /// Underlying parse error.
        source: std::num::ParseFloatError,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
