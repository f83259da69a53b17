use widget_core::config::FaqConfig;

use tempfile::TempDir;

const TWO_PANELS: &str = r#"
[[panels]]
question = "How do I add a task?"
answer = "Type it and press Enter."

[[panels]]
question = "Can two answers be open?"
answer = "No."
"#;

#[test]
fn given_no_faq_file_when_loaded_then_uses_built_in_panels() {
    let dir = TempDir::new().unwrap();

    let config = FaqConfig::load(dir.path()).unwrap();

    assert_eq!(config.panels.len(), FaqConfig::default().panels.len());
    assert!(config.validate().is_ok());
}

/// **VALUE**: Verifies the bundled `config/faq.toml` location takes priority.
#[test]
fn given_faq_in_config_subdirectory_when_loaded_then_uses_it() {
    // GIVEN: faq.toml in both locations
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(dir.path().join("config").join("faq.toml"), TWO_PANELS).unwrap();
    std::fs::write(
        dir.path().join("faq.toml"),
        "[[panels]]\nquestion = \"Root?\"\nanswer = \"Root.\"\n",
    )
    .unwrap();

    // WHEN: Loading
    let config = FaqConfig::load(dir.path()).unwrap();

    // THEN: The config/ copy wins
    assert_eq!(config.panels.len(), 2);
    assert_eq!(config.panels[0].question, "How do I add a task?");
}

#[test]
fn given_invalid_bundled_faq_when_loaded_then_falls_back_to_root_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config").join("faq.toml"),
        "[[panels]]\nquestion = \"\"\nanswer = \"x\"\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("faq.toml"), TWO_PANELS).unwrap();

    let config = FaqConfig::load(dir.path()).unwrap();

    assert_eq!(config.panels[1].question, "Can two answers be open?");
}

#[test]
fn given_unparseable_faq_when_loaded_then_falls_back_to_built_in_panels() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("faq.toml"), "panels = 3 = 4").unwrap();

    let config = FaqConfig::load(dir.path()).unwrap();

    assert_eq!(config.panels, FaqConfig::default().panels);
}

#[test]
fn given_empty_panel_list_when_validated_then_rejected() {
    let config = FaqConfig { panels: Vec::new() };

    assert!(config.validate().is_err());
}
