//! Shared fixtures for unit tests.

use crate::domain::{Environment, Role, ScriptDescriptor, SessionKeys};
use crate::ports::ScriptCatalog;

/// Session used across rendering tests.
pub fn sample_session() -> SessionKeys {
    SessionKeys::new("abc", "xyz", "s3cr3t")
}

/// Catalog over a caller-supplied table, resolved by first match.
pub struct StaticCatalog {
    descriptors: Vec<ScriptDescriptor>,
}

impl StaticCatalog {
    pub fn new(descriptors: Vec<ScriptDescriptor>) -> Self {
        Self { descriptors }
    }

    /// A single remote-only entry whose renderer panics if called.
    pub fn panicking() -> Self {
        fn never(_: &[String]) -> String {
            panic!("renderer must not be invoked");
        }

        Self::new(vec![ScriptDescriptor {
            roles: &[Role::Remote],
            name: "Never",
            environment: Environment::Bash,
            public_safe: false,
            renderer: never,
        }])
    }
}

impl ScriptCatalog for StaticCatalog {
    fn descriptors(&self) -> &[ScriptDescriptor] {
        &self.descriptors
    }

    fn lookup(&self, role: Role, name: &str) -> Option<&ScriptDescriptor> {
        self.descriptors.iter().find(|d| d.applies_to(role) && d.name == name)
    }
}
