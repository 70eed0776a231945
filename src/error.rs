use thiserror::Error;

/// Errors reported before a transform enters the parallel kernel.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transform size {size} is not a power of two")]
    NotPowerOfTwo { size: usize },

    #[error("{buffer} buffer holds {actual} elements, expected {expected}")]
    SizeMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{name} cutoff must be at least 1")]
    InvalidCutoff { name: &'static str },

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("environment variable {variable} has invalid value {value:?}")]
    InvalidEnvironment { variable: &'static str, value: String },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
