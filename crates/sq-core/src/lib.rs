//! sq-core - Core library for sqlinity
//!
//! This crate provides the configuration loader, the migration record and its
//! `<id>_<name>.up.sql` naming convention, folder parsing, and scaffolding of
//! new migration pairs.

pub mod config;
pub mod creator;
pub mod error;
pub mod migration;
pub mod parser;

pub use config::{Config, CONFIG_FILE_NAME};
pub use creator::{create_migration, next_migration_id, slugify, CreatedMigration};
pub use error::{SqError, SqResult};
pub use migration::{match_file_name, FileNameMatch, Migration, MigrationFileName};
pub use parser::parse_migrations;
