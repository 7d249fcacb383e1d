use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structured errors returned by the placement solver and checker.
pub enum SolveError {
    /// The requested board size is outside `1..=max`.
    InvalidSize { n: usize, max: usize },
    /// More placements were found than the configured limit allows.
    LimitExceeded { limit: usize, observed: usize },
    /// A rendered board does not describe a legal placement.
    InvalidBoard { row: usize, reason: String },
    /// A report could not be encoded or decoded.
    Encode { error: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidSize { n, max } => {
                write!(f, "invalid board size {n} (expected 1..={max})")
            }
            SolveError::LimitExceeded { limit, observed } => write!(
                f,
                "solution limit exceeded (limit={limit}, observed={observed})"
            ),
            SolveError::InvalidBoard { row, reason } => {
                write!(f, "invalid board at row {row}: {reason}")
            }
            SolveError::Encode { error } => write!(f, "report encoding failed: {error}"),
        }
    }
}

impl std::error::Error for SolveError {}
