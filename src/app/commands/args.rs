//! Args command - canonical bootstrap arguments for a session.

use crate::app::config::SessionInputs;
use crate::app::services::InstallScriptService;
use crate::domain::{AppError, Role};
use crate::ports::ScriptCatalog;

/// Execute the args command.
pub fn execute<C: ScriptCatalog>(
    service: &InstallScriptService<C>,
    role: Role,
    inputs: SessionInputs,
) -> Result<Vec<String>, AppError> {
    let session = inputs.load()?.resolve(role)?;
    Ok(service.derive_arguments(role, &session))
}
