//! Install command lookup and rendering service.

use tracing::{debug, warn};

use crate::domain::{AppError, Role, ScriptDescriptor, SessionKeys};
use crate::ports::ScriptCatalog;

/// Stateless service over a read-only install script catalog.
pub struct InstallScriptService<C: ScriptCatalog> {
    catalog: C,
}

impl<C: ScriptCatalog> InstallScriptService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Descriptors offered to `role`, in catalog order.
    pub fn list_options(&self, role: Role) -> Vec<&ScriptDescriptor> {
        self.catalog.descriptors().iter().filter(|d| d.applies_to(role)).collect()
    }

    /// Find the descriptor named `name` among those offered to `role`.
    pub fn find_option(&self, role: Role, name: &str) -> Result<&ScriptDescriptor, AppError> {
        debug!(%role, name, "looking up install script");
        self.catalog.lookup(role, name).ok_or_else(|| AppError::DescriptorNotFound {
            role,
            name: name.to_string(),
            available: self
                .list_options(role)
                .iter()
                .map(|d| d.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Canonical bootstrap arguments for `role` in `session`.
    pub fn derive_arguments(&self, role: Role, session: &SessionKeys) -> Vec<String> {
        session.arguments_for(role)
    }

    /// Render the install command for `role` and `name`.
    ///
    /// `args_override`, when present, is used verbatim and `session` is not consulted.
    pub fn render_install_command(
        &self,
        role: Role,
        name: &str,
        session: &SessionKeys,
        args_override: Option<&[String]>,
    ) -> Result<String, AppError> {
        let descriptor = self.find_option(role, name)?;

        let args = match args_override {
            Some(args) => {
                if args.is_empty() {
                    warn!(%role, name, "empty argument override; command will be incomplete");
                }
                args.to_vec()
            }
            None => self.derive_arguments(role, session),
        };

        debug!(
            %role,
            name,
            argc = args.len(),
            env = %descriptor.environment,
            "rendering install command"
        );
        Ok(descriptor.render(&args))
    }
}
