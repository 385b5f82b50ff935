//! Install script descriptor domain model.

use crate::domain::{Environment, Role};

/// Renders an ordered argument list into a command line.
///
/// Must be total: any argument list, including an empty one, yields a string.
pub type RenderFn = fn(&[String]) -> String;

/// One selectable install method.
#[derive(Debug, Clone, Copy)]
pub struct ScriptDescriptor {
    /// Roles this method can be offered to. Never empty in a valid catalog.
    pub roles: &'static [Role],
    /// Human-readable name, unique among descriptors sharing a role.
    pub name: &'static str,
    /// Syntax family of the rendered text.
    pub environment: Environment,
    /// Whether the rendered text may be shown to untrusted viewers.
    pub public_safe: bool,
    /// Argument encoding and command template for this environment.
    pub renderer: RenderFn,
}

impl ScriptDescriptor {
    pub fn applies_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Render the install command for `args`.
    pub fn render(&self, args: &[String]) -> String {
        (self.renderer)(args)
    }
}
