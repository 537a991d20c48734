//! Scaffolding of new migration file pairs

use crate::config::Config;
use crate::error::{SqError, SqResult};
use crate::migration::{MigrationFileName, DOWN_SUFFIX, UP_SUFFIX};
use crate::parser::list_file_names;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Placeholder written into a freshly created up script
pub const UP_PLACEHOLDER: &str = "-- TODO: Write your up migration SQL here\n";

/// Placeholder written into a freshly created down script
pub const DOWN_PLACEHOLDER: &str = "-- TODO: Write your down migration SQL here\n";

static NUMBERED_UP_FILE: OnceLock<Regex> = OnceLock::new();

fn numbered_up_file() -> &'static Regex {
    // ASCII digits only; `\d` would also accept other Unicode digits
    NUMBERED_UP_FILE
        .get_or_init(|| Regex::new(r"^([0-9]+)_.*\.up\.sql$").expect("valid regex literal"))
}

/// Paths and naming of a scaffolded migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMigration {
    /// Zero-padded identifier, e.g. `004`
    pub id: String,
    /// Slug derived from the requested name
    pub slug: String,
    /// Path of the new `.up.sql` file
    pub up_path: PathBuf,
    /// Path of the new `.down.sql` file
    pub down_path: PathBuf,
}

/// Compute the next free identifier from existing file names.
///
/// Takes the largest numeric prefix among `<digits>_*.up.sql` names, adds one
/// and pads to three digits. Prefixes too large for a `u64` are ignored.
pub fn next_migration_id<S: AsRef<str>>(file_names: &[S]) -> String {
    let max_id = file_names
        .iter()
        .filter_map(|name| numbered_up_file().captures(name.as_ref()))
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{:03}", max_id.saturating_add(1))
}

/// Lower-case a free-form name and replace spaces with underscores.
pub fn slugify(raw_name: &str) -> String {
    raw_name.replace(' ', "_").to_lowercase()
}

/// Reject names whose slug could escape the SQL folder.
fn validate_slug(raw_name: &str, slug: &str) -> SqResult<()> {
    let reason = if raw_name.trim().is_empty() {
        Some("name must not be empty")
    } else if slug.contains('/') || slug.contains('\\') {
        Some("name must not contain '/' or '\\'")
    } else if slug.contains("..") {
        Some("name must not contain '..'")
    } else if slug.contains(UP_SUFFIX) || slug.contains(DOWN_SUFFIX) {
        Some("name must not contain '.up.sql' or '.down.sql'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SqError::InvalidMigrationName {
            name: raw_name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn write_stub(path: &Path, content: &str) -> SqResult<()> {
    std::fs::write(path, content).map_err(|e| SqError::FileWrite {
        path: path.display().to_string(),
        source: e,
    })
}

/// Create an empty `<id>_<slug>.up.sql` / `.down.sql` pair in the SQL folder.
///
/// Nothing is written when the folder cannot be listed. If the down script
/// fails to write, the up script already on disk is left in place.
pub fn create_migration(config: &Config, raw_name: &str) -> SqResult<CreatedMigration> {
    let slug = slugify(raw_name);
    validate_slug(raw_name, &slug)?;

    let dir = config.sql_folder_path();
    let existing = list_file_names(&dir)?;
    let id = next_migration_id(&existing);

    let file_name = MigrationFileName {
        id: id.clone(),
        name: slug.clone(),
    };
    let up_path = dir.join(file_name.up_file_name());
    let down_path = dir.join(file_name.down_file_name());

    write_stub(&up_path, UP_PLACEHOLDER)?;
    write_stub(&down_path, DOWN_PLACEHOLDER)?;
    log::info!("Created migration {} ({})", id, slug);

    Ok(CreatedMigration {
        id,
        slug,
        up_path,
        down_path,
    })
}

#[cfg(test)]
#[path = "creator_test.rs"]
mod tests;
