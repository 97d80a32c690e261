use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteLoadError {
    #[error("route parse error on line {line}: {msg}")]
    Parse { line: u64, msg: String },

    #[error("route file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad canned route index {index}: must be in [0-{max}]")]
    UnknownCanned { index: usize, max: usize },
}

pub type RouteLoadResult<T> = Result<T, RouteLoadError>;
