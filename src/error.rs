use thiserror::Error;

/// Errors raised while loading quotes or reading commands.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the quote file does not hold a quote and a title.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// One-based line number in the source.
        line: usize,
        reason: &'static str,
    },

    /// The shell received a command it does not know.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

/// Result type alias for quote index operations.
pub type Result<T> = std::result::Result<T, Error>;
