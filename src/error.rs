use thiserror::Error;

/// Fatal failures only. Capacity overruns (dictionary, input, misspelled
/// list) are not errors: they truncate silently and stay observable through
/// the reported counts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
