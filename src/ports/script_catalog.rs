//! Install script catalog port definition.

use crate::domain::{Role, ScriptDescriptor};

/// Trait for read-only access to the install script catalog.
pub trait ScriptCatalog {
    /// All descriptors in catalog order.
    fn descriptors(&self) -> &[ScriptDescriptor];

    /// Get the descriptor applicable to `role` named `name`.
    fn lookup(&self, role: Role, name: &str) -> Option<&ScriptDescriptor>;
}

impl<T: ScriptCatalog + ?Sized> ScriptCatalog for &T {
    fn descriptors(&self) -> &[ScriptDescriptor] {
        (**self).descriptors()
    }

    fn lookup(&self, role: Role, name: &str) -> Option<&ScriptDescriptor> {
        (**self).lookup(role, name)
    }
}
