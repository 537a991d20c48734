//! Generate command implementation - parse the SQL folder and emit C# sources

use anyhow::{Context, Result};
use sq_codegen::Generator;
use sq_core::parse_migrations;

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the generate command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;

    println!("Configuration loaded successfully:");
    println!("SQL Folder: {}", config.sql_folder);
    println!("Output Folder: {}", config.output_folder);
    println!("Namespace: {}", config.namespace);

    let migrations = parse_migrations(&config).context("parsing migrations")?;

    println!(
        "Migrations parsed successfully: {} found",
        migrations.len()
    );
    for migration in &migrations {
        println!("ID: {}, Name: {}", migration.id, migration.name);
        if !migration.has_down_file {
            log::info!("{} has no down script", migration.up_file);
        }
    }

    let generator = Generator::new(&config).context("generating migrations")?;
    let written = generator
        .generate_migrations(&migrations)
        .context("generating migrations")?;
    let registry = generator
        .generate_registry(&migrations)
        .context("generating migration registry")?;

    for path in &written {
        log::info!("Wrote {}", path.display());
    }
    println!(
        "Generated {} migration file{} and {}",
        written.len(),
        if written.len() == 1 { "" } else { "s" },
        registry.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
