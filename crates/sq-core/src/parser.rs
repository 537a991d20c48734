//! Migration discovery: turns a folder of SQL pairs into ordered records

use crate::config::Config;
use crate::error::{SqError, SqResult};
use crate::migration::{match_file_name, FileNameMatch, Migration, UP_SUFFIX};
use std::path::Path;

/// List the file names of a directory (non-recursive), sorted lexically.
///
/// Names that are not valid UTF-8 cannot follow the naming convention and are
/// skipped with a warning.
pub(crate) fn list_file_names(dir: &Path) -> SqResult<Vec<String>> {
    let io_err = |e| SqError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

/// Read a whole file into a string with path context on failure
fn read_script(path: &Path) -> SqResult<String> {
    std::fs::read_to_string(path).map_err(|e| SqError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse every `<id>_<name>.up.sql` file in the configured SQL folder.
///
/// Results follow lexical file name order. Duplicate identifiers are kept.
/// Up files without an `_` separator are reported and skipped; only listing
/// and read failures abort parsing.
pub fn parse_migrations(config: &Config) -> SqResult<Vec<Migration>> {
    let dir = config.sql_folder_path();
    let mut migrations = Vec::new();

    for file_name in list_file_names(&dir)? {
        let parsed = match match_file_name(&file_name) {
            FileNameMatch::Up(parsed) => parsed,
            FileNameMatch::MissingSeparator => {
                log::warn!(
                    "Skipping file {}: does not follow naming convention (ID_Name{})",
                    file_name,
                    UP_SUFFIX
                );
                continue;
            }
            FileNameMatch::NotUpFile => continue,
        };

        let up_path = dir.join(&file_name);
        let down_path = dir.join(parsed.down_file_name());

        let up_sql = read_script(&up_path)?;
        let has_down_file = down_path.exists();
        let down_sql = if has_down_file {
            read_script(&down_path)?
        } else {
            log::debug!("No down script for {}", file_name);
            String::new()
        };

        log::debug!("Parsed migration {} ({})", parsed.id, parsed.name);
        migrations.push(Migration {
            id: parsed.id,
            name: parsed.name,
            up_sql,
            down_sql,
            up_file: file_name,
            has_down_file,
        });
    }

    Ok(migrations)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
