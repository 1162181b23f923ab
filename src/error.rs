/// Possible errors

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed instance file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Every worker thread panicked; there is no result to aggregate.
    #[error("all {workers} search workers failed")]
    AllWorkersFailed { workers: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
