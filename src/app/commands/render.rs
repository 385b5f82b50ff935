//! Render command - produce one install command line.

use crate::app::config::SessionInputs;
use crate::app::services::InstallScriptService;
use crate::domain::{AppError, Role, SessionKeys};
use crate::ports::ScriptCatalog;

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub role: Role,
    pub name: String,
    pub session: SessionInputs,
    pub args_override: Option<Vec<String>>,
}

/// Execute the render command.
///
/// With an argument override no session source is read at all.
pub fn execute<C: ScriptCatalog>(
    service: &InstallScriptService<C>,
    options: RenderOptions,
) -> Result<String, AppError> {
    let RenderOptions { role, name, session, args_override } = options;

    // Resolve the name first so an unknown method is reported before session errors.
    service.find_option(role, &name)?;

    let session = match &args_override {
        Some(_) => SessionKeys::default(),
        None => session.load()?.resolve(role)?,
    };

    service.render_install_command(role, &name, &session, args_override.as_deref())
}
