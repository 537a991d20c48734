//! Template environment for sqlinity code generation

use crate::error::{CodegenError, CodegenResult};
use crate::filters::{csharp_ident, csharp_string};
use minijinja::{Environment, UndefinedBehavior, Value};

/// Template name of the per-migration class
pub const MIGRATION_TEMPLATE: &str = "migration.cs";

/// Template name of the registry class
pub const REGISTRY_TEMPLATE: &str = "registry.cs";

/// Minijinja environment preloaded with the embedded C# templates
pub struct CodegenEnvironment {
    env: Environment<'static>,
}

impl CodegenEnvironment {
    /// Create the environment with the built-in templates and filters
    pub fn new() -> CodegenResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_filter("csharp_string", csharp_string);
        env.add_filter("csharp_ident", csharp_ident);

        env.add_template(
            MIGRATION_TEMPLATE,
            include_str!("../templates/migration.cs.j2"),
        )
        .map_err(|e| CodegenError::render(MIGRATION_TEMPLATE, e))?;
        env.add_template(
            REGISTRY_TEMPLATE,
            include_str!("../templates/registry.cs.j2"),
        )
        .map_err(|e| CodegenError::render(REGISTRY_TEMPLATE, e))?;

        Ok(Self { env })
    }

    /// Render a named template with the given context
    pub fn render(&self, name: &str, ctx: Value) -> CodegenResult<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| CodegenError::render(name, e))
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
