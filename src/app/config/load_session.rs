//! Session key loading from a TOML file and command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, Role, SessionKeys};

/// Session file contents; every field is optional so flags can fill gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionFile {
    #[serde(default, alias = "local_key")]
    initiator_key: Option<String>,
    #[serde(default, alias = "target_key")]
    remote_key: Option<String>,
    #[serde(default)]
    encryption_secret: Option<String>,
}

/// Read a session TOML file.
///
/// Missing fields are left empty; [`SessionInputs::resolve`] decides which are required.
pub fn load_session_file(path: &Path) -> Result<SessionInputs, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::SessionFileMissing(path.to_path_buf()),
        _ => AppError::Io(err),
    })?;

    let file: SessionFile = toml::from_str(&content).map_err(|err| {
        AppError::SessionFileInvalid { path: path.to_path_buf(), details: err.message().to_string() }
    })?;

    debug!(path = %path.display(), "loaded session file");
    Ok(SessionInputs {
        file: Some(path.to_path_buf()),
        initiator_key: file.initiator_key,
        remote_key: file.remote_key,
        encryption_secret: file.encryption_secret,
    })
}

/// Session key sources gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    pub file: Option<PathBuf>,
    pub initiator_key: Option<String>,
    pub remote_key: Option<String>,
    pub encryption_secret: Option<String>,
}

impl SessionInputs {
    /// Overlay `flags` on top of `self`, field by field.
    pub fn merged_with(self, flags: SessionInputs) -> SessionInputs {
        SessionInputs {
            file: flags.file.or(self.file),
            initiator_key: flags.initiator_key.or(self.initiator_key),
            remote_key: flags.remote_key.or(self.remote_key),
            encryption_secret: flags.encryption_secret.or(self.encryption_secret),
        }
    }

    /// Load the referenced session file (if any) and overlay these inputs on it.
    pub fn load(self) -> Result<SessionInputs, AppError> {
        match &self.file {
            Some(path) => Ok(load_session_file(path)?.merged_with(self)),
            None => Ok(self),
        }
    }

    /// Build session keys for `role`.
    ///
    /// The role's own key and the encryption secret are required; the other
    /// peer's key is not used for rendering and may be absent.
    pub fn resolve(self, role: Role) -> Result<SessionKeys, AppError> {
        let mut missing = Vec::new();
        if role == Role::Initiator && self.initiator_key.is_none() {
            missing.push("initiator_key");
        }
        if role == Role::Remote && self.remote_key.is_none() {
            missing.push("remote_key");
        }
        if self.encryption_secret.is_none() {
            missing.push("encryption_secret");
        }
        if !missing.is_empty() {
            return Err(AppError::MissingSessionKeys(missing.join(", ")));
        }

        Ok(SessionKeys::new(
            self.initiator_key.unwrap_or_default(),
            self.remote_key.unwrap_or_default(),
            self.encryption_secret.unwrap_or_default(),
        ))
    }
}
