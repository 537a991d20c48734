//! Template filters for emitting C#: csharp_string() and csharp_ident().

/// Render a value as a C# verbatim string literal.
///
/// Verbatim literals keep newlines and backslashes as-is, so SQL bodies are
/// embedded byte for byte; only `"` needs doubling.
///
/// Usage in templates:
/// ```jinja
/// public const string Up = {{ migration.up_sql | csharp_string }};
/// ```
pub fn csharp_string(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn csharp_ident(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Class name (and file stem) of the generated wrapper for a migration
pub fn migration_class_name(id: &str, name: &str) -> String {
    format!("Migration_{}_{}", csharp_ident(id), csharp_ident(name))
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
