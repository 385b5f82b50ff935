pub mod environment;
pub mod error;
pub mod role;
pub mod script;
pub mod session;

pub use environment::Environment;
pub use error::AppError;
pub use role::Role;
pub use script::{RenderFn, ScriptDescriptor};
pub use session::SessionKeys;
