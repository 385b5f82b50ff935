use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// Which side of a tunshell session an install command is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The peer sharing access (runs the client locally).
    Initiator,
    /// The peer being connected to (the target host).
    Remote,
}

impl Role {
    /// Both roles in declaration order.
    pub const ALL: [Role; 2] = [Role::Initiator, Role::Remote];

    /// Single-character tag passed as the first bootstrap argument.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Initiator => "L",
            Role::Remote => "T",
        }
    }

    /// Lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Initiator => "initiator",
            Role::Remote => "remote",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initiator" | "local" | "l" => Ok(Role::Initiator),
            "remote" | "target" | "t" => Ok(Role::Remote),
            _ => Err(AppError::InvalidRole(s.to_string())),
        }
    }
}
