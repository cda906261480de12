use path_mapper::config::{load_config, GroupConfig, PackConfig};
use path_mapper::Error;
use std::fs::write;
use std::path::Path;

fn parse(yaml: &str) -> PackConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pack.yaml");
    write(&path, yaml).unwrap();
    load_config(&path).unwrap()
}

fn base_yaml(groups: &str) -> String {
    format!(
        "name: Test Mod\n\
         author: Someone\n\
         description: A test mod\n\
         version: \"1.0.0\"\n\
         groups:\n{groups}"
    )
}

const SWAP_GROUP: &str = "  - mode: swap\n    \
     name: sit\n    \
     variants: 2\n    \
     templates:\n      - \"chara/human/{race_id}/s{variant}.pap\"\n    \
     races: [\"Midlander M\", \"Highlander M\"]\n";

#[test]
fn test_parses_swap_group() {
    let config = parse(&base_yaml(SWAP_GROUP));
    assert_eq!(config.name, "Test Mod");
    assert_eq!(config.groups.len(), 1);
    match &config.groups[0] {
        GroupConfig::Swap(group) => {
            assert_eq!(group.name, "sit");
            assert_eq!(group.variants, 2);
            assert_eq!(group.templates.len(), 1);
            let applied: Vec<&str> = group
                .effective_applied_races()
                .iter()
                .map(String::as_str)
                .collect();
            assert_eq!(applied, vec!["Midlander M", "Highlander M"]);
        }
        other => panic!("Expected a swap group, got {other:?}"),
    }
    config.validate().unwrap();
}

#[test]
fn test_distinct_applied_and_option_races() {
    let groups = "  - mode: swap\n    \
         name: sit\n    \
         variants: 1\n    \
         templates: [\"a/{race_id}.pap\"]\n    \
         applied_races: [\"Midlander M\"]\n    \
         option_races: [\"Viera M\", \"Viera F\"]\n";
    let config = parse(&base_yaml(groups));
    match &config.groups[0] {
        GroupConfig::Swap(group) => {
            assert_eq!(group.effective_applied_races().len(), 1);
            assert_eq!(group.effective_option_races().len(), 2);
        }
        other => panic!("Expected a swap group, got {other:?}"),
    }
    config.validate().unwrap();
}

#[test]
fn test_missing_metadata_field_fails_validation() {
    let mut config = parse(&base_yaml(SWAP_GROUP));
    config.author = String::new();

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::MissingField { .. }));
}

#[test]
fn test_zero_variants_fails_validation() {
    let yaml = base_yaml(SWAP_GROUP).replace("variants: 2", "variants: 0");
    let config = parse(&yaml);

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::InvalidVariantCount { .. }));
}

#[test]
fn test_no_races_fails_validation() {
    let yaml =
        base_yaml(SWAP_GROUP).replace("races: [\"Midlander M\", \"Highlander M\"]", "races: []");
    let config = parse(&yaml);

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::NoRacesSelected { .. }));
}

#[test]
fn test_unknown_race_label_fails_validation() {
    let yaml = base_yaml(SWAP_GROUP).replace("Highlander M", "Garlean M");
    let config = parse(&yaml);

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::UnknownRace { .. }));
}

#[test]
fn test_missing_local_file_fails_validation() {
    let groups = "  - mode: override\n    \
         name: dye\n    \
         races: [\"Elezen M\"]\n    \
         options:\n      \
         - name: Red\n        \
           files:\n          \
           - source: /nonexistent/red.tex\n            \
             target: \"chara/human/{race_id}/y.tex\"\n";
    let config = parse(&base_yaml(groups));

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::MissingLocalFile { .. }));
}

#[test]
fn test_override_group_with_existing_file_validates() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("red.tex");
    write(&local, b"pixels").unwrap();

    let groups = format!(
        "  - mode: override\n    \
         name: dye\n    \
         races: [\"Elezen M\"]\n    \
         options:\n      \
         - name: Red\n        \
           files:\n          \
           - source: {}\n            \
             target: \"chara/human/{{race_id}}/y.tex\"\n",
        local.display()
    );
    let config = parse(&base_yaml(&groups));
    config.validate().unwrap();
}

#[test]
fn test_load_config_fails_on_missing_file() {
    let error = load_config(Path::new("/nonexistent/pack.yaml")).unwrap_err();
    assert!(matches!(error, Error::FileOperation { .. }));
}

#[test]
fn test_no_groups_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pack.yaml");
    write(
        &path,
        "name: Test Mod\nauthor: Someone\ndescription: A test\nversion: \"1.0.0\"\n",
    )
    .unwrap();
    let config = load_config(&path).unwrap();

    let error = config.validate().unwrap_err();
    assert!(matches!(error, Error::MissingField { .. }));
}
