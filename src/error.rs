use thiserror::Error;

/// Benchmark parameter and solver errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("Invalid bounds: min {min} is greater than max {max}")]
    InvertedBounds { min: i64, max: i64 },

    #[error("Invalid length: {0} (must be non-negative)")]
    NegativeLength(i64),

    #[error("Invalid trial count: {0} (must be non-negative)")]
    NegativeTrials(i64),

    #[error("Invalid trial count: {requested} (at most {max} trials per run)")]
    TooManyTrials { requested: u64, max: u32 },

    #[error("Empty sequence: maximum subarray requires at least one element")]
    EmptySequence,

    #[error("Worker count must be at least 1")]
    NoWorkers,
}
