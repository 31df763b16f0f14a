use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WalkError {
    Parse(String),
    InvalidWalk { index: usize, reason: String },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::Parse(msg) => write!(f, "Failed to parse walks: {msg}"),
            WalkError::InvalidWalk { index, reason } => write!(f, "Skipped walk #{index}: {reason}"),
        }
    }
}

impl std::error::Error for WalkError {}

impl From<serde_json::Error> for WalkError {
    fn from(err: serde_json::Error) -> Self {
        WalkError::Parse(err.to_string())
    }
}
