//! API Facade for the application.
//!
//! These functions run against the process-wide built-in catalog.

use std::sync::OnceLock;

use crate::adapters::catalogs::BuiltinScriptCatalog;
use crate::app::commands::{args as session_args, list, render};
use crate::app::services::InstallScriptService;

pub use crate::app::commands::list::ScriptSummary;
pub use crate::app::commands::render::RenderOptions;
pub use crate::app::config::{SessionInputs, load_session_file};
pub use crate::domain::{AppError, Environment, Role, ScriptDescriptor, SessionKeys};

type BuiltinService = InstallScriptService<&'static BuiltinScriptCatalog>;

fn service() -> &'static BuiltinService {
    static SERVICE: OnceLock<BuiltinService> = OnceLock::new();
    SERVICE.get_or_init(|| InstallScriptService::new(BuiltinScriptCatalog::shared()))
}

/// Install methods offered to `role`, in catalog order.
pub fn list_options(role: Role) -> Vec<&'static ScriptDescriptor> {
    service().list_options(role)
}

/// Find the install method named `name` for `role`.
pub fn find_option(role: Role, name: &str) -> Result<&'static ScriptDescriptor, AppError> {
    service().find_option(role, name)
}

/// Canonical bootstrap arguments: role tag, the role's key, encryption secret.
pub fn derive_arguments(role: Role, session: &SessionKeys) -> Vec<String> {
    service().derive_arguments(role, session)
}

/// Render the install command for `role` and `name`.
///
/// When `args_override` is given it is passed through verbatim and `session` is ignored.
pub fn render_install_command(
    role: Role,
    name: &str,
    session: &SessionKeys,
    args_override: Option<&[String]>,
) -> Result<String, AppError> {
    service().render_install_command(role, name, session, args_override)
}

/// Summaries of the install methods for `role`, optionally only public-safe ones.
pub fn list_summaries(role: Role, public_only: bool) -> Vec<ScriptSummary> {
    list::execute(service(), role, public_only)
}

/// Render using session inputs gathered from files and flags.
pub fn render(options: RenderOptions) -> Result<String, AppError> {
    render::execute(service(), options)
}

/// Bootstrap arguments for `role` from session inputs gathered from files and flags.
pub fn args(role: Role, inputs: SessionInputs) -> Result<Vec<String>, AppError> {
    session_args::execute(service(), role, inputs)
}
