/// Failure while reading an optional table file at startup.
///
/// Normalizers themselves never fail; only table loading can.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format in {path} at line {line}: {reason}")]
    InvalidLine {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
