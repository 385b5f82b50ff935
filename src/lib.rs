//! tunshell-install: catalog and renderer for one-line tunshell install commands.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::catalogs::{BUILTIN_INSTALL_SCRIPTS, BuiltinScriptCatalog};
pub use app::api::*;
pub use app::services::InstallScriptService;
pub use ports::ScriptCatalog;
