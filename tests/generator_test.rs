use indexmap::IndexMap;
use path_mapper::generator::{
    build_override_options, build_swap_options, generate_swap_group, OverrideOption,
    OverrideParameters, OverridePattern, SwapParameters,
};
use path_mapper::model::{GroupDocument, GroupType};
use path_mapper::RaceSelection;
use std::path::PathBuf;

fn selection(pairs: &[(&str, &str)]) -> RaceSelection {
    pairs
        .iter()
        .map(|(label, id)| (label.to_string(), id.to_string()))
        .collect::<IndexMap<_, _>>()
}

#[test]
fn test_swap_worked_example() {
    // One template, one source race, one target race, variant "01"
    let parameters = SwapParameters {
        group_name: "x".to_string(),
        group_type: GroupType::Multi,
        templates: vec!["chara/human/{race_id}/x{variant}.pap".to_string()],
        applied_races: selection(&[("Midlander M", "c0101")]),
        option_races: selection(&[("Highlander M", "c0301")]),
    };

    let options = build_swap_options(&parameters, "01");

    // Exactly one option with exactly one mapping
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].name, "Highlander M");
    assert_eq!(options[0].file_swaps.len(), 1);
    assert_eq!(
        options[0].file_swaps["chara/human/c0101/x01.pap"],
        "chara/human/c0301/x01.pap"
    );
}

#[test]
fn test_swap_option_count_matches_target_races() {
    let parameters = SwapParameters {
        group_name: "pose".to_string(),
        group_type: GroupType::Multi,
        templates: vec![
            "a/{race_id}/s{variant}_loop.pap".to_string(),
            "a/{race_id}/s{variant}_start.pap".to_string(),
        ],
        applied_races: selection(&[
            ("Midlander M", "c0101"),
            ("Highlander M", "c0301"),
            ("Elezen M", "c0501"),
        ]),
        option_races: selection(&[("Midlander M", "c0101"), ("Viera M", "c1701")]),
    };

    let options = build_swap_options(&parameters, "04");

    // One option per target race, each with templates × sources entries
    assert_eq!(options.len(), 2);
    for option in &options {
        assert_eq!(option.file_swaps.len(), 2 * 3);
        assert!(option.files.is_empty(), "Swap options never populate Files");
    }
}

#[test]
fn test_swap_option_names_are_unique_within_group() {
    let parameters = SwapParameters {
        group_name: "pose".to_string(),
        group_type: GroupType::Single,
        templates: vec!["a/{race_id}.pap".to_string()],
        applied_races: selection(&[("Midlander M", "c0101")]),
        option_races: selection(&[("Midlander M", "c0101"), ("Highlander M", "c0301")]),
    };

    let options = build_swap_options(&parameters, "01");
    let mut names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), options.len(), "Option names must be unique");
}

#[test]
fn test_override_worked_example() {
    // One option, one pattern pair, one applied race
    let source = PathBuf::from("/tmp/red.tex");
    let parameters = OverrideParameters {
        group_name: "dye".to_string(),
        options: vec![OverrideOption {
            name: "Red".to_string(),
            patterns: vec![OverridePattern {
                source: source.clone(),
                target: "chara/human/{race_id}/y.tex".to_string(),
            }],
        }],
        applied_races: selection(&[("Elezen M", "c0201")]),
    };

    let (options, copies) = build_override_options(&parameters).unwrap();

    assert_eq!(options[0].name, "Off");
    let red = &options[1];
    assert_eq!(red.name, "Red");
    assert!(
        red.files.contains_key("chara/human/c0201/y.tex"),
        "Target key should carry the substituted race identifier"
    );
    assert_eq!(red.files["chara/human/c0201/y.tex"], copies[0].archive_path);
    assert_eq!(copies[0].source, source);
    assert!(
        red.file_swaps.is_empty(),
        "Override options never populate FileSwaps"
    );
}

#[test]
fn test_group_document_round_trips_through_json() {
    let parameters = SwapParameters {
        group_name: "sit".to_string(),
        group_type: GroupType::Single,
        templates: vec!["chara/human/{race_id}/s{variant}.pap".to_string()],
        applied_races: selection(&[("Midlander M", "c0101"), ("Elezen M", "c0501")]),
        option_races: selection(&[("Highlander M", "c0301")]),
    };

    let (document, _) = generate_swap_group(&parameters, "02");
    let json = serde_json::to_string_pretty(&document).unwrap();
    let parsed: GroupDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.options.len(), document.options.len());
    for (parsed_option, built_option) in parsed.options.iter().zip(&document.options) {
        assert_eq!(parsed_option.name, built_option.name);
        assert_eq!(parsed_option.files, built_option.files);
        assert_eq!(parsed_option.file_swaps, built_option.file_swaps);
    }
    assert_eq!(parsed, document);
}
