use std::fs;

use sheet_core::{ItemCollection, ItemFactory};
use sheet_runtime::{
    CharacterFactory, RepositoryError, export_character, export_file_name, import_character,
};

#[test]
fn export_then_import_keeps_sheet_but_not_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut hero = CharacterFactory::named("Hazel Thornquill");
    hero.level = 2;
    hero.background = "Cheesemaker".into();
    hero.inventory = ItemCollection::from_items(vec![ItemFactory::custom("Cheese", None)]);

    let path = dir.path().join(export_file_name(&hero));
    assert!(path.ends_with("hazel-thornquill.json"));
    export_character(&hero, &path).expect("export");

    let imported = import_character(&path).expect("import");
    assert_ne!(imported.id, hero.id);
    assert_eq!(imported.name, hero.name);
    assert_eq!(imported.level, 2);
    assert_eq!(imported.background, "Cheesemaker");
    assert_eq!(imported.inventory, hero.inventory);
}

#[test]
fn importing_partial_records_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("old.json");
    fs::write(&path, r#"{ "name": "Old Whisker", "pips": 12 }"#).expect("write");

    let imported = import_character(&path).expect("import");
    assert_eq!(imported.name, "Old Whisker");
    assert_eq!(imported.pips, 12);
    assert_eq!(imported.strength, CharacterFactory::STARTING_ATTRIBUTE);
    assert!(imported.alive);
}

#[test]
fn importing_garbage_is_corrupted_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "[1, 2").expect("write");

    assert!(matches!(
        import_character(&path),
        Err(RepositoryError::CorruptedData(_))
    ));
    assert!(matches!(
        import_character(&dir.path().join("missing.json")),
        Err(RepositoryError::Io(_))
    ));
}
