use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] crate::graph::ParseError),
    #[error("Path error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Failed to read input '{path}': {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },
}
