//! Network loading and lookup error types.

/// Errors that can occur while loading the network description.
///
/// Any of these aborts startup: the planner never runs over a partially
/// loaded network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The source could not be read
    #[error("failed to read network source: {0}")]
    Io(#[from] std::io::Error),

    /// A row is malformed (missing coordinates, bad literal, misaligned columns)
    #[error("malformed network data at row {row}: {reason}")]
    DataFormat { row: usize, reason: String },

    /// A line was rejected while assembling the network outside any file
    #[error("invalid line: {reason}")]
    InvalidLine { reason: String },

    /// The source parsed but describes no routable line
    #[error("malformed network data: no routable lines")]
    Empty,
}

impl NetworkError {
    pub(crate) fn data_format(row: usize, reason: impl Into<String>) -> Self {
        NetworkError::DataFormat {
            row,
            reason: reason.into(),
        }
    }

    /// Returns true if the failure is a problem with the data itself rather
    /// than with reading it.
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            NetworkError::DataFormat { .. } | NetworkError::InvalidLine { .. } | NetworkError::Empty
        )
    }
}

/// A station name that is not part of the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {0}")]
pub struct UnknownStation(pub String);
