//! Session configuration loading.

mod load_session;

pub use load_session::{SessionInputs, load_session_file};
