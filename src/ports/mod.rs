mod script_catalog;

pub use script_catalog::ScriptCatalog;
