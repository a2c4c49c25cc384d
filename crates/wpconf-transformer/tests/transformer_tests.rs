use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use wpconf_test_utils::{sample_config, ConfigFixture, ANCHOR_LINE};
use wpconf_transformer::prelude::*;

#[test]
fn test_sample_inspection() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();

    assert!(t.exists(Kind::Constant, "DB_NAME").unwrap());
    assert!(t.exists(Kind::Constant, "ABSPATH").unwrap());
    assert!(t.exists(Kind::Variable, "table_prefix").unwrap());
    assert!(!t.exists(Kind::Constant, "WP_CACHE").unwrap());

    assert_eq!(
        t.get_value(Kind::Constant, "ABSPATH").unwrap().as_deref(),
        Some("__DIR__ . '/'")
    );
    assert_eq!(fixture.read(), sample_config());
}

#[test]
fn test_add_then_exists_then_add_again() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();

    assert!(t.add(Kind::Constant, "WP_CACHE", &json!(true), &t.add_options()).unwrap());
    assert!(t.exists(Kind::Constant, "WP_CACHE").unwrap());

    let after_first = fixture.read();
    assert!(after_first.contains(&format!("define( 'WP_CACHE', true );\n\n{ANCHOR_LINE}")));

    assert!(!t.add(Kind::Constant, "WP_CACHE", &json!(false), &t.add_options()).unwrap());
    assert_eq!(fixture.read(), after_first);
    assert_eq!(after_first.matches("WP_CACHE").count(), 1);
}

#[test]
fn test_update_missing_matches_add() {
    let added = ConfigFixture::sample();
    let updated = ConfigFixture::sample();

    let value = json!({"host": "db", "port": 3306});
    let t = added.transformer();
    t.add(Kind::Variable, "db_options", &value, &t.add_options()).unwrap();
    let t = updated.transformer();
    t.update(Kind::Variable, "db_options", &value, &t.update_options()).unwrap();

    assert_eq!(added.read(), updated.read());
    assert!(updated
        .read()
        .contains("$db_options = array ( 'host' => 'db', 'port' => 3306 );"));
}

#[test]
fn test_update_raw_expression() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();
    let options = t.update_options().with_raw(true);

    assert!(t
        .update(Kind::Constant, "DB_HOST", &json!("getenv( 'DB_HOST' )"), &options)
        .unwrap());
    assert!(fixture
        .read()
        .contains("define( 'DB_HOST', getenv( 'DB_HOST' ) );\n"));
    assert_eq!(
        t.get_value(Kind::Constant, "DB_HOST").unwrap().as_deref(),
        Some("getenv( 'DB_HOST' )")
    );
}

#[test]
fn test_update_leaves_duplicate_text_alone() {
    // Two files concatenated by hand: the same line appears twice.
    let text = format!("define('A', 1);\n{ANCHOR_LINE}\ndefine('A', 1);\n");
    let fixture = ConfigFixture::new(&text);
    let t = fixture.transformer();

    assert!(t.update(Kind::Constant, "A", &json!(2), &t.update_options()).unwrap());
    assert_eq!(
        fixture.read(),
        format!("define('A', 1);\n{ANCHOR_LINE}\ndefine('A', 2);\n")
    );
}

#[test]
fn test_remove_sample_constant() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();

    assert!(t.remove(Kind::Constant, "WP_DEBUG").unwrap());
    let text = fixture.read();
    assert!(!text.contains("WP_DEBUG"));
    assert_eq!(text, sample_config().replace("define( 'WP_DEBUG', false );\n", ""));
    assert!(!t.exists(Kind::Constant, "WP_DEBUG").unwrap());
}

#[test]
fn test_external_edits_are_seen() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();
    assert!(!t.exists(Kind::Constant, "WP_HOME").unwrap());

    fixture.write(&format!("define('WP_HOME', 'https://example.com');\n{ANCHOR_LINE}\n"));
    assert!(t.exists(Kind::Constant, "WP_HOME").unwrap());
    assert!(!t.exists(Kind::Constant, "DB_NAME").unwrap());
}

#[test]
fn test_configured_anchor_and_placement() {
    let fixture = ConfigFixture::new("<?php\n// custom:\n$x = 1;\n");
    let config = TransformerConfig::from_toml_str(
        r#"
        anchor = "// custom:"
        separator = "\n"
        placement = "after"
        normalize = true
        "#,
    )
    .unwrap();
    let t = fixture.transformer_with(config);

    assert!(t.add(Kind::Variable, "y", &json!(2), &t.add_options()).unwrap());
    assert_eq!(fixture.read(), "<?php\n// custom:\n$y = 2;\n$x = 1;\n");

    // Normalize comes from the config.
    fixture.write("<?php\n// custom:\n$x   =   1 ;\n");
    assert!(t.update(Kind::Variable, "x", &json!(5), &t.update_options()).unwrap());
    assert_eq!(fixture.read(), "<?php\n// custom:\n$x = 5;\n");
}

#[test]
fn test_missing_file_after_construction() {
    let fixture = ConfigFixture::sample();
    let t = fixture.transformer();
    std::fs::remove_file(fixture.path()).unwrap();

    assert!(matches!(
        t.exists(Kind::Constant, "DB_NAME"),
        Err(TransformerError::EmptyFile { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_add_then_exists(name in "[A-Z][A-Z0-9_]{0,12}", flag in any::<bool>()) {
        let fixture = ConfigFixture::sample();
        let t = fixture.transformer();
        prop_assume!(!t.exists(Kind::Constant, &name).unwrap());

        prop_assert!(t.add(Kind::Constant, &name, &json!(flag), &t.add_options()).unwrap());
        prop_assert!(t.exists(Kind::Constant, &name).unwrap());
        prop_assert!(!t.add(Kind::Constant, &name, &json!(flag), &t.add_options()).unwrap());
    }

    #[test]
    fn prop_remove_absent_is_byte_identical(name in "[a-z][a-z0-9_]{0,12}") {
        let fixture = ConfigFixture::sample();
        let t = fixture.transformer();
        prop_assume!(name != "table_prefix");

        let before = fixture.read();
        prop_assert!(!t.remove(Kind::Variable, &name).unwrap());
        prop_assert_eq!(fixture.read(), before);
    }
}
