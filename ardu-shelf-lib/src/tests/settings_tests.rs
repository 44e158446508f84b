use super::*;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.fetch.relay, DEFAULT_RELAY);
    assert_eq!(settings.render.placeholder_image, "img/blank.gif");
    assert_eq!(settings.render.page_base, "index.html");
    assert_eq!(settings.render.viewport_width, 1024);
}

#[test]
fn test_viewport_width_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[render]\nviewport_width = 360\n").unwrap();
    assert_eq!(load_settings_from(&path).unwrap().render.viewport_width, 360);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[render]\nplaceholder_image = \"img/none.png\"\n",
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.render.placeholder_image, "img/none.png");
    assert_eq!(settings.render.page_base, "index.html");
    assert_eq!(settings.fetch.relay, DEFAULT_RELAY);
    assert_eq!(settings.catalog.default_source, None);
}

#[test]
fn test_invalid_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[render\n").unwrap();
    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_save_default_source_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("settings.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[fetch]\nrelay = \"https://relay.example/\"\n").unwrap();

    save_default_source_to(&path, Some("https://example.org/repo.json")).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(
        settings.catalog.default_source.as_deref(),
        Some("https://example.org/repo.json")
    );
    assert_eq!(settings.fetch.relay, "https://relay.example/");

    save_default_source_to(&path, None).unwrap();
    let cleared = load_settings_from(&path).unwrap();
    assert_eq!(cleared.catalog.default_source, None);
    assert_eq!(cleared.fetch.relay, "https://relay.example/");
}

#[test]
fn test_save_default_source_refuses_unparseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let original = "[fetch]\nrelay = \"https://mine/\"\n[render\n";
    std::fs::write(&path, original).unwrap();

    let err = save_default_source_to(&path, Some("x.json")).unwrap_err();
    assert!(err.to_string().contains("not valid TOML"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_save_default_source_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new").join("settings.toml");

    save_default_source_to(&path, Some("x.json")).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.catalog.default_source.as_deref(), Some("x.json"));
}

#[test]
fn test_resolve_target_priority() {
    let mut settings = Settings::default();
    settings.catalog.default_source = Some("saved.json".to_string());

    assert_eq!(
        resolve_target(Some("explicit.json".to_string()), Some("?query.json"), &settings),
        "explicit.json"
    );
    assert_eq!(resolve_target(None, Some("?query.json"), &settings), "query.json");
    assert_eq!(resolve_target(None, Some("?"), &settings), "saved.json");
    assert_eq!(
        resolve_target(None, None, &Settings::default()),
        DEFAULT_CATALOG_PATH
    );
}

#[test]
fn test_settings_string_round_trips() {
    let text = settings_string(&Settings::default()).unwrap();
    assert!(text.contains("relay"));
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Settings::default());
}
