//! List command - install methods offered to a role.

use serde::Serialize;

use crate::app::services::InstallScriptService;
use crate::domain::{Environment, Role, ScriptDescriptor};
use crate::ports::ScriptCatalog;

/// Summary information for one install method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    pub name: String,
    pub environment: Environment,
    pub public_safe: bool,
    pub roles: Vec<Role>,
}

impl From<&ScriptDescriptor> for ScriptSummary {
    fn from(descriptor: &ScriptDescriptor) -> Self {
        Self {
            name: descriptor.name.to_string(),
            environment: descriptor.environment,
            public_safe: descriptor.public_safe,
            roles: descriptor.roles.to_vec(),
        }
    }
}

/// Execute the list command.
///
/// `public_only` hides methods that expose a general execution primitive; the
/// service itself always returns every applicable method.
pub fn execute<C: ScriptCatalog>(
    service: &InstallScriptService<C>,
    role: Role,
    public_only: bool,
) -> Vec<ScriptSummary> {
    service
        .list_options(role)
        .into_iter()
        .filter(|d| !public_only || d.public_safe)
        .map(ScriptSummary::from)
        .collect()
}
