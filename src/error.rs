//! Error type for fallible list operations.

use std::error::Error;
use std::fmt;

/// Errors reported by fallible [`List`](crate::List) operations.
///
/// Every error is terminal for the call that produced it and leaves the list
/// unmodified and structurally valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index fell outside the operation's valid range.
    IndexOutOfBounds {
        /// The index the caller supplied.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// No element satisfied the search predicate.
    NotFound,
    /// The node handle refers to a node that is no longer in the list.
    StaleHandle,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            ListError::NotFound => write!(f, "no element matched the predicate"),
            ListError::StaleHandle => write!(f, "node handle does not refer to a live node"),
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ListError::IndexOutOfBounds { index: 4, len: 3 }.to_string(),
            "index 4 out of bounds for list of length 3"
        );
        assert_eq!(
            ListError::NotFound.to_string(),
            "no element matched the predicate"
        );
        assert_eq!(
            ListError::StaleHandle.to_string(),
            "node handle does not refer to a live node"
        );
    }
}
