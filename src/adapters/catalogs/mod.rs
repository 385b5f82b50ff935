pub mod builtin_install_scripts;

pub use self::builtin_install_scripts::{BUILTIN_INSTALL_SCRIPTS, BuiltinScriptCatalog};
