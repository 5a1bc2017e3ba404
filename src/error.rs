use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an `IntervalTree`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An interval was created with its start after its end.
    #[error("invalid interval: start is greater than end")]
    InvalidInterval,

    /// A `(start, end)` pair in a bulk input had its start after its end.
    #[error("invalid interval at position {position}: start is greater than end")]
    InvalidBounds {
        /// Zero-based position of the first rejected pair.
        position: usize,
    },

    /// The input does not fit into the arena's index type.
    #[error("{len} intervals exceed the index capacity of {max}")]
    CapacityExceeded {
        /// Number of intervals supplied.
        len: usize,
        /// Largest number of intervals the index type can address.
        max: usize,
    },
}
