use thiserror::Error;
use waterhole_scanner::ScanError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{0} is empty or contains only comments")]
    EmptyInput(String),

    #[error("No {0} provided")]
    NoTargets(&'static str),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
