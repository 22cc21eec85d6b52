use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Source and destination buffers differ in length.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch: destination holds {actual} values, source has {expected}"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}
