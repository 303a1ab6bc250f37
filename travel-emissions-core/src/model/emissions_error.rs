use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the category of an input rejected by the emissions model.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputKind {
    /// a numeric input fell outside of its accepted range
    OutOfRange,
    /// an identifier did not name a member of a closed enumeration
    UnknownEnum,
}

impl Display for InvalidInputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvalidInputKind::OutOfRange => "out-of-range",
            InvalidInputKind::UnknownEnum => "unknown-enum",
        };
        write!(f, "{s}")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EmissionsError {
    #[error("invalid input ({kind}): {message}")]
    InvalidInput {
        kind: InvalidInputKind,
        message: String,
    },
}

impl EmissionsError {
    pub fn out_of_range(message: impl Into<String>) -> EmissionsError {
        EmissionsError::InvalidInput {
            kind: InvalidInputKind::OutOfRange,
            message: message.into(),
        }
    }

    pub fn unknown_enum(message: impl Into<String>) -> EmissionsError {
        EmissionsError::InvalidInput {
            kind: InvalidInputKind::UnknownEnum,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> InvalidInputKind {
        match self {
            EmissionsError::InvalidInput { kind, .. } => *kind,
        }
    }
}
