pub mod install_script_service;

pub use install_script_service::InstallScriptService;
