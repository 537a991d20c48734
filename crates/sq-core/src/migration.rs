//! Migration records and the `<id>_<name>.up.sql` file naming convention

use serde::Serialize;

/// Suffix of the forward script of a migration
pub const UP_SUFFIX: &str = ".up.sql";

/// Suffix of the optional reverse script of a migration
pub const DOWN_SUFFIX: &str = ".down.sql";

/// Separator between the identifier and the name in a migration file name
pub const ID_SEPARATOR: char = '_';

/// A single migration parsed from disk.
///
/// Identifier and name come from the up-file name and are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Migration {
    /// Identifier, usually a zero-padded number such as `"001"`
    pub id: String,

    /// Name part of the file name, e.g. `"create_users"`
    pub name: String,

    /// Contents of the `.up.sql` file
    pub up_sql: String,

    /// Contents of the `.down.sql` file, empty when there is none
    pub down_sql: String,

    /// File name of the up script this record was parsed from
    pub up_file: String,

    /// Whether a sibling `.down.sql` file was found
    pub has_down_file: bool,
}

/// The identifier/name split of an up-file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFileName {
    /// Text before the first `_`
    pub id: String,
    /// Text after the first `_`, without the `.up.sql` suffix
    pub name: String,
}

impl MigrationFileName {
    /// File name `<id>_<name>`, without any suffix
    pub fn base_name(&self) -> String {
        format!("{}{}{}", self.id, ID_SEPARATOR, self.name)
    }

    /// File name of the up script
    pub fn up_file_name(&self) -> String {
        format!("{}{}", self.base_name(), UP_SUFFIX)
    }

    /// File name of the down script
    pub fn down_file_name(&self) -> String {
        format!("{}{}", self.base_name(), DOWN_SUFFIX)
    }
}

/// Outcome of matching a directory entry against the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNameMatch {
    /// `<id>_<name>.up.sql`
    Up(MigrationFileName),
    /// Ends in `.up.sql` but has no `_` separating identifier and name
    MissingSeparator,
    /// Not an up script at all (down scripts, READMEs, ...)
    NotUpFile,
}

/// Match a file name against `<id>_<name>.up.sql`.
///
/// The identifier is everything before the FIRST underscore, so
/// `001_add_users.up.sql` yields id `001` and name `add_users`.
pub fn match_file_name(file_name: &str) -> FileNameMatch {
    let Some(base) = file_name.strip_suffix(UP_SUFFIX) else {
        return FileNameMatch::NotUpFile;
    };
    match base.split_once(ID_SEPARATOR) {
        Some((id, name)) => FileNameMatch::Up(MigrationFileName {
            id: id.to_string(),
            name: name.to_string(),
        }),
        None => FileNameMatch::MissingSeparator,
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
