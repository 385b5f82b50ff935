use std::fmt;

use serde::Deserialize;

use crate::domain::Role;

/// Keys issued for one tunshell session.
///
/// Produced by the session relay; this crate never creates or checks them.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionKeys {
    #[serde(alias = "local_key", alias = "localKey", alias = "initiatorKey")]
    pub initiator_key: String,
    #[serde(alias = "target_key", alias = "targetKey", alias = "remoteKey")]
    pub remote_key: String,
    #[serde(alias = "encryptionSecret")]
    pub encryption_secret: String,
}

impl SessionKeys {
    pub fn new(
        initiator_key: impl Into<String>,
        remote_key: impl Into<String>,
        encryption_secret: impl Into<String>,
    ) -> Self {
        Self {
            initiator_key: initiator_key.into(),
            remote_key: remote_key.into(),
            encryption_secret: encryption_secret.into(),
        }
    }

    /// The key belonging to `role`.
    pub fn key_for(&self, role: Role) -> &str {
        match role {
            Role::Initiator => &self.initiator_key,
            Role::Remote => &self.remote_key,
        }
    }

    /// Bootstrap arguments for `role`: role tag, the role's key, then the shared secret.
    pub fn arguments_for(&self, role: Role) -> Vec<String> {
        vec![
            role.tag().to_string(),
            self.key_for(role).to_string(),
            self.encryption_secret.clone(),
        ]
    }
}

// Keys are credentials; keep them out of debug output and logs.
impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("initiator_key", &"<redacted>")
            .field("remote_key", &"<redacted>")
            .field("encryption_secret", &"<redacted>")
            .finish()
    }
}
