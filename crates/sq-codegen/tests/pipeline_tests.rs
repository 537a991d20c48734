//! End-to-end tests: scaffold, parse, and generate against real folders

use sq_codegen::{generate_migrations, generate_registry, REGISTRY_FILE_NAME};
use sq_core::creator::{DOWN_PLACEHOLDER, UP_PLACEHOLDER};
use sq_core::{create_migration, parse_migrations, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project_config(root: &Path) -> Config {
    Config {
        sql_folder: root.join("sql").display().to_string(),
        output_folder: root.join("Generated").display().to_string(),
        namespace: "Game.Database".to_string(),
    }
}

/// Scaffolded migrations parse back with the slug as name and placeholder bodies
#[test]
fn test_create_then_parse_round_trip() {
    let temp = TempDir::new().unwrap();
    let config = project_config(temp.path());
    fs::create_dir_all(&config.sql_folder).unwrap();
    fs::write(
        Path::new(&config.sql_folder).join("003_x.up.sql"),
        "CREATE TABLE x (id INTEGER);",
    )
    .unwrap();

    let created = create_migration(&config, "Add Users Table").unwrap();
    assert_eq!(created.id, "004");
    assert_eq!(created.slug, "add_users_table");

    let migrations = parse_migrations(&config).unwrap();
    assert_eq!(migrations.len(), 2);
    let added = &migrations[1];
    assert_eq!(added.id, "004");
    assert_eq!(added.name, "add_users_table");
    assert_eq!(added.up_sql, UP_PLACEHOLDER);
    assert_eq!(added.down_sql, DOWN_PLACEHOLDER);
}

/// The fixture folder generates one class per migration plus an ordered registry
#[test]
fn test_generate_from_fixture_folder() {
    let temp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../sq-core/tests/fixtures/sample_migrations");
    let config = Config {
        sql_folder: fixtures.display().to_string(),
        output_folder: temp.path().join("Generated").display().to_string(),
        namespace: "Game.Database".to_string(),
    };

    let migrations = parse_migrations(&config).unwrap();
    let written = generate_migrations(&config, &migrations).unwrap();
    let registry_path = generate_registry(&config, &migrations).unwrap();

    assert_eq!(written.len(), 3);
    let out = temp.path().join("Generated");
    for class in [
        "Migration_001_create_players",
        "Migration_002_add_inventory",
        "Migration_003_seed_items",
    ] {
        let source = fs::read_to_string(out.join(format!("{class}.cs"))).unwrap();
        assert!(source.contains("namespace Game.Database"));
        assert!(source.contains(&format!("public static class {class}")));
    }

    let seed = fs::read_to_string(out.join("Migration_003_seed_items.cs")).unwrap();
    assert!(seed.contains("-- \"\"Starter\"\" items"));
    assert!(seed.contains("public const string Down = @\"\";"));

    assert_eq!(registry_path, out.join(REGISTRY_FILE_NAME));
    let registry = fs::read_to_string(&registry_path).unwrap();
    let first = registry.find("Migration_001_create_players.Id").unwrap();
    let second = registry.find("Migration_002_add_inventory.Id").unwrap();
    let third = registry.find("Migration_003_seed_items.Id").unwrap();
    assert!(first < second && second < third);
    assert!(!registry.contains("draft"));
}

/// Regenerating after a migration is deleted leaves its old class behind
#[test]
fn test_regeneration_accumulates_outputs() {
    let temp = TempDir::new().unwrap();
    let config = project_config(temp.path());
    fs::create_dir_all(&config.sql_folder).unwrap();

    let first = create_migration(&config, "first").unwrap();
    create_migration(&config, "second").unwrap();
    let migrations = parse_migrations(&config).unwrap();
    generate_migrations(&config, &migrations).unwrap();

    fs::remove_file(&first.up_path).unwrap();
    fs::remove_file(&first.down_path).unwrap();
    let migrations = parse_migrations(&config).unwrap();
    generate_migrations(&config, &migrations).unwrap();
    generate_registry(&config, &migrations).unwrap();

    let out = temp.path().join("Generated");
    assert!(out.join("Migration_001_first.cs").exists());
    let registry = fs::read_to_string(out.join(REGISTRY_FILE_NAME)).unwrap();
    assert!(!registry.contains("Migration_001_first"));
    assert!(registry.contains("Migration_002_second"));
}
