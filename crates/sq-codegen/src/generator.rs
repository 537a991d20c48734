//! Rendering of per-migration classes and the migration registry

use crate::environment::{CodegenEnvironment, MIGRATION_TEMPLATE, REGISTRY_TEMPLATE};
use crate::error::{CodegenError, CodegenResult};
use crate::filters::migration_class_name;
use minijinja::context;
use serde::Serialize;
use sq_core::{Config, Migration};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of the generated registry
pub const REGISTRY_FILE_NAME: &str = "MigrationRegistry.cs";

/// Template view of a migration
#[derive(Debug, Serialize)]
struct MigrationView<'a> {
    class_name: &'a str,
    id: &'a str,
    name: &'a str,
    up_sql: &'a str,
    down_sql: &'a str,
    up_file: &'a str,
}

impl<'a> MigrationView<'a> {
    fn new(m: &'a Migration, class_name: &'a str) -> Self {
        Self {
            class_name,
            id: &m.id,
            name: &m.name,
            up_sql: &m.up_sql,
            down_sql: &m.down_sql,
            up_file: &m.up_file,
        }
    }
}

/// Assign a distinct class name to every migration, in order.
///
/// Names that only differ in characters `csharp_ident` flattens (or only in
/// case, which matters on case-insensitive file systems) would land in the
/// same file; later ones get a `_2`, `_3`, ... suffix.
pub fn assign_class_names(migrations: &[Migration]) -> Vec<String> {
    let mut taken = HashSet::new();
    migrations
        .iter()
        .map(|m| {
            let base = migration_class_name(&m.id, &m.name);
            let mut candidate = base.clone();
            let mut counter = 2;
            while !taken.insert(candidate.to_ascii_lowercase()) {
                candidate = format!("{}_{}", base, counter);
                counter += 1;
            }
            if candidate != base {
                log::warn!(
                    "{} maps to class {} which is already used; generating {} instead",
                    m.up_file,
                    base,
                    candidate
                );
            }
            candidate
        })
        .collect()
}

/// Writes generated C# sources into the configured output folder
pub struct Generator<'a> {
    config: &'a Config,
    env: CodegenEnvironment,
}

impl<'a> Generator<'a> {
    /// Create a generator bound to a config
    pub fn new(config: &'a Config) -> CodegenResult<Self> {
        Ok(Self {
            config,
            env: CodegenEnvironment::new()?,
        })
    }

    /// Render the class source for a single migration under `class_name`
    pub fn render_migration(&self, migration: &Migration, class_name: &str) -> CodegenResult<String> {
        self.env.render(
            MIGRATION_TEMPLATE,
            context! {
                namespace => &self.config.namespace,
                migration => MigrationView::new(migration, class_name),
            },
        )
    }

    /// Render the registry source listing migrations in the given order
    pub fn render_registry(&self, migrations: &[Migration]) -> CodegenResult<String> {
        let class_names = assign_class_names(migrations);
        let views: Vec<MigrationView<'_>> = migrations
            .iter()
            .zip(&class_names)
            .map(|(m, class_name)| MigrationView::new(m, class_name))
            .collect();
        self.env.render(
            REGISTRY_TEMPLATE,
            context! {
                namespace => &self.config.namespace,
                migrations => views,
            },
        )
    }

    /// Write one class file per migration.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    /// Existing files in the output folder are never removed.
    pub fn generate_migrations(&self, migrations: &[Migration]) -> CodegenResult<Vec<PathBuf>> {
        let out_dir = self.ensure_output_dir()?;
        let class_names = assign_class_names(migrations);
        let mut written = Vec::with_capacity(migrations.len());

        for (migration, class_name) in migrations.iter().zip(&class_names) {
            let source = self.render_migration(migration, class_name)?;
            let path = out_dir.join(format!("{}.cs", class_name));
            write_file(&path, &source)?;
            log::debug!("Generated {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Write the registry file enumerating all migrations
    pub fn generate_registry(&self, migrations: &[Migration]) -> CodegenResult<PathBuf> {
        let out_dir = self.ensure_output_dir()?;
        let source = self.render_registry(migrations)?;
        let path = out_dir.join(REGISTRY_FILE_NAME);
        write_file(&path, &source)?;
        log::debug!(
            "Generated {} with {} migrations",
            path.display(),
            migrations.len()
        );
        Ok(path)
    }

    fn ensure_output_dir(&self) -> CodegenResult<PathBuf> {
        let out_dir = self.config.output_folder_path();
        std::fs::create_dir_all(&out_dir).map_err(|e| CodegenError::OutputDir {
            path: out_dir.display().to_string(),
            source: e,
        })?;
        Ok(out_dir)
    }
}

fn write_file(path: &Path, content: &str) -> CodegenResult<()> {
    std::fs::write(path, content).map_err(|e| CodegenError::FileWrite {
        path: path.display().to_string(),
        source: e,
    })
}

/// Generate one class file per migration into `config.output_folder`
pub fn generate_migrations(config: &Config, migrations: &[Migration]) -> CodegenResult<Vec<PathBuf>> {
    Generator::new(config)?.generate_migrations(migrations)
}

/// Generate the registry file into `config.output_folder`
pub fn generate_registry(config: &Config, migrations: &[Migration]) -> CodegenResult<PathBuf> {
    Generator::new(config)?.generate_registry(migrations)
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
