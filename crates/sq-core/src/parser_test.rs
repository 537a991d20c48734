use super::*;
use std::fs;
use tempfile::TempDir;

fn config_for(dir: &Path) -> Config {
    Config {
        sql_folder: dir.display().to_string(),
        output_folder: String::new(),
        namespace: String::new(),
    }
}

#[test]
fn test_parse_up_and_down_pair() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("001_init.up.sql"), "CREATE TABLE t;").unwrap();
    fs::write(temp.path().join("001_init.down.sql"), "DROP TABLE t;").unwrap();

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    assert_eq!(migrations.len(), 1);
    let m = &migrations[0];
    assert_eq!(m.id, "001");
    assert_eq!(m.name, "init");
    assert_eq!(m.up_sql, "CREATE TABLE t;");
    assert_eq!(m.down_sql, "DROP TABLE t;");
    assert_eq!(m.up_file, "001_init.up.sql");
    assert!(m.has_down_file);
}

#[test]
fn test_missing_down_file_yields_empty_script() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("002_seed.up.sql"), "INSERT INTO t VALUES (1);").unwrap();

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    assert_eq!(migrations.len(), 1);
    assert_eq!(migrations[0].down_sql, "");
    assert!(!migrations[0].has_down_file);
}

#[test]
fn test_file_without_separator_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.up.sql"), "SELECT 1;").unwrap();
    fs::write(temp.path().join("001_init.up.sql"), "CREATE TABLE t;").unwrap();
    fs::write(temp.path().join("002_more.up.sql"), "CREATE TABLE u;").unwrap();

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    let ids: Vec<&str> = migrations.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["001", "002"]);
}

#[test]
fn test_unrelated_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "docs").unwrap();
    fs::write(temp.path().join("003_orphan.down.sql"), "DROP TABLE x;").unwrap();
    fs::write(temp.path().join("001_init.up.sql"), "CREATE TABLE t;").unwrap();

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    assert_eq!(migrations.len(), 1);
    assert_eq!(migrations[0].id, "001");
}

#[test]
fn test_order_is_lexical_by_file_name() {
    let temp = TempDir::new().unwrap();
    for name in ["010_c.up.sql", "002_b.up.sql", "001_a.up.sql", "9_z.up.sql"] {
        fs::write(temp.path().join(name), "SELECT 1;").unwrap();
    }

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    let files: Vec<&str> = migrations.iter().map(|m| m.up_file.as_str()).collect();
    assert_eq!(
        files,
        vec!["001_a.up.sql", "002_b.up.sql", "010_c.up.sql", "9_z.up.sql"]
    );
}

#[test]
fn test_duplicate_ids_are_kept() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("001_first.up.sql"), "SELECT 1;").unwrap();
    fs::write(temp.path().join("001_second.up.sql"), "SELECT 2;").unwrap();

    let migrations = parse_migrations(&config_for(temp.path())).unwrap();

    assert_eq!(migrations.len(), 2);
    assert_eq!(migrations[0].name, "first");
    assert_eq!(migrations[1].name, "second");
}

#[test]
fn test_empty_folder() {
    let temp = TempDir::new().unwrap();
    let migrations = parse_migrations(&config_for(temp.path())).unwrap();
    assert!(migrations.is_empty());
}

#[test]
fn test_missing_folder_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = parse_migrations(&config_for(&temp.path().join("nope"))).unwrap_err();
    assert!(matches!(err, SqError::IoWithPath { .. }));
}

#[test]
fn test_unreadable_up_script_is_an_error() {
    let temp = TempDir::new().unwrap();
    // A directory with an up-file name cannot be read as a file
    fs::create_dir(temp.path().join("001_dir.up.sql")).unwrap();

    let err = parse_migrations(&config_for(temp.path())).unwrap_err();
    match err {
        SqError::IoWithPath { path, .. } => assert!(path.ends_with("001_dir.up.sql")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fixture_folder() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_migrations");
    let migrations = parse_migrations(&config_for(&fixtures)).unwrap();

    let pairs: Vec<(&str, &str)> = migrations
        .iter()
        .map(|m| (m.id.as_str(), m.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("001", "create_players"),
            ("002", "add_inventory"),
            ("003", "seed_items"),
        ]
    );
    assert!(migrations[0].down_sql.contains("DROP TABLE players"));
    assert_eq!(migrations[2].down_sql, "");
}
