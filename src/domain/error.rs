use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Role;

/// Library-wide error type for install command operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No catalog entry matches the requested role and name.
    #[error("Install script '{name}' not found for {role}. Available: {available}")]
    DescriptorNotFound { role: Role, name: String, available: String },

    /// Two catalog entries applicable to the same role share a name.
    #[error("Install script '{name}' is declared more than once for {role}")]
    DuplicateDescriptor { role: Role, name: String },

    /// A catalog entry declares no applicable role.
    #[error("Install script '{0}' does not apply to any role")]
    EmptyRoles(String),

    /// Role text could not be parsed.
    #[error("Invalid role '{0}': must be one of initiator, remote")]
    InvalidRole(String),

    /// Session file does not exist.
    #[error("Session file not found: {}", .0.display())]
    SessionFileMissing(PathBuf),

    /// Session file exists but could not be parsed.
    #[error("Invalid session file {}: {details}", .path.display())]
    SessionFileInvalid { path: PathBuf, details: String },

    /// Session keys are incomplete after merging file and flags.
    #[error("Session keys incomplete, missing: {0}")]
    MissingSessionKeys(String),

    /// Interactive selection failed or was unavailable.
    #[error("{0}")]
    Selection(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DescriptorNotFound { .. } | AppError::SessionFileMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::InvalidRole(_)
            | AppError::SessionFileInvalid { .. }
            | AppError::MissingSessionKeys(_) => io::ErrorKind::InvalidInput,
            AppError::DuplicateDescriptor { .. } | AppError::EmptyRoles(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::Selection(_) => io::ErrorKind::Other,
        }
    }
}
