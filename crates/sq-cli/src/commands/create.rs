//! Create command implementation - scaffolds an empty migration pair

use anyhow::{Context, Result};
use sq_core::create_migration;

use crate::cli::{CreateArgs, GlobalArgs};
use crate::commands::common::load_config;

/// Execute the create command
pub(crate) fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let raw_name = args.raw_name();

    let created = create_migration(&config, &raw_name).context("creating migration file")?;

    println!("Created migration files:");
    println!("- {}", created.up_path.display());
    println!("- {}", created.down_path.display());

    Ok(())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
