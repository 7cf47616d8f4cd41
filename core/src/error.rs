use thiserror::Error;

/// Result type for ddsmcat operations
pub type Result<T> = std::result::Result<T, DdsmError>;

/// Error types for ddsmcat operations
///
/// Parsing is fail-fast: the first grammar violation in a case-metadata or
/// annotation file surfaces as one of these variants and no partial document
/// is returned. Variants carry the source line or field that failed.
#[derive(Error, Debug)]
pub enum DdsmError {
    /// Required key absent from the file
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Key appeared twice in a grammar that forbids repeats
    #[error("duplicate key {key} on line {line}")]
    DuplicateKey { key: String, line: usize },

    /// Token that must be a base-10 integer was something else
    #[error("expected integer {what} on line {line}, found '{token}'")]
    ExpectedInteger {
        what: String,
        token: String,
        line: usize,
    },

    /// Date value that does not name a real calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Annotation file ended before a declared record
    #[error("truncated annotation: {0}")]
    Truncated(String),

    /// Chain-code digit outside the eight compass directions
    #[error("chain code digit {0} is outside 0-7")]
    BadChainCode(i64),

    /// Boundary coordinate outside the mask shape
    #[error("coordinate ({row}, {col}) is outside mask shape ({rows}, {cols})")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
