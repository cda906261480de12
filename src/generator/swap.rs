//! File-swap option builder
//!
//! For every target race, builds a `FileSwaps` mapping that redirects each
//! (template × source race) path to the same template substituted with the
//! target race. Mapping order is pinned: template outer, source race inner,
//! both following caller-supplied order.

use crate::model::{GroupDocument, GroupType, OptionRecord};
use crate::template::substitute;
use crate::{RaceSelection, TemplateList};

use super::assemble_group;

/// Everything a file-swap operation needs, captured explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct SwapParameters {
    pub group_name: String,
    pub group_type: GroupType,
    pub templates: TemplateList,
    /// Source side: the races whose paths get redirected
    pub applied_races: RaceSelection,
    /// Target side: one option is generated per race in here
    pub option_races: RaceSelection,
}

/// Builds the option list for one variant of a file-swap group
///
/// Each target race yields one option with `templates.len() ×
/// applied_races.len()` swap entries (absent key collisions). In
/// single-choice mode a synthetic "Off" option with empty mappings is
/// prepended.
pub fn build_swap_options(parameters: &SwapParameters, variant: &str) -> Vec<OptionRecord> {
    let mut options = Vec::new();
    if parameters.group_type == GroupType::Single {
        options.push(OptionRecord::off());
    }

    for (target_label, target_id) in &parameters.option_races {
        let mut option = OptionRecord::named(target_label);
        for template in &parameters.templates {
            for source_id in parameters.applied_races.values() {
                let source_path = substitute(template, source_id, variant);
                let target_path = substitute(template, target_id, variant);
                option.file_swaps.insert(source_path, target_path);
            }
        }
        options.push(option);
    }

    options
}

/// Generates the group document and filename for one variant of a file-swap
/// group
pub fn generate_swap_group(
    parameters: &SwapParameters,
    variant: &str,
) -> (GroupDocument, String) {
    let options = build_swap_options(parameters, variant);
    assemble_group(
        &parameters.group_name,
        variant,
        parameters.group_type,
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn selection(pairs: &[(&str, &str)]) -> RaceSelection {
        pairs
            .iter()
            .map(|(label, id)| (label.to_string(), id.to_string()))
            .collect::<IndexMap<_, _>>()
    }

    #[test]
    fn test_single_template_single_source_single_target() {
        let parameters = SwapParameters {
            group_name: "pose".to_string(),
            group_type: GroupType::Multi,
            templates: vec!["chara/human/{race_id}/x{variant}.pap".to_string()],
            applied_races: selection(&[("Midlander M", "c0101")]),
            option_races: selection(&[("Highlander M", "c0301")]),
        };

        let options = build_swap_options(&parameters, "01");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "Highlander M");
        assert_eq!(options[0].file_swaps.len(), 1);
        assert_eq!(
            options[0].file_swaps["chara/human/c0101/x01.pap"],
            "chara/human/c0301/x01.pap"
        );
    }

    #[test]
    fn test_entry_count_is_templates_times_sources() {
        let parameters = SwapParameters {
            group_name: "pose".to_string(),
            group_type: GroupType::Multi,
            templates: vec![
                "a/{race_id}/{variant}_loop.pap".to_string(),
                "a/{race_id}/{variant}_start.pap".to_string(),
                "a/{race_id}/{variant}_end.pap".to_string(),
            ],
            applied_races: selection(&[("Midlander M", "c0101"), ("Elezen M", "c0501")]),
            option_races: selection(&[("Viera M", "c1701")]),
        };

        let options = build_swap_options(&parameters, "02");
        assert_eq!(options.len(), 1);
        assert_eq!(
            options[0].file_swaps.len(),
            3 * 2,
            "Each option should hold templates × source races entries"
        );
    }

    #[test]
    fn test_key_order_is_template_outer_source_inner() {
        let parameters = SwapParameters {
            group_name: "pose".to_string(),
            group_type: GroupType::Multi,
            templates: vec![
                "first/{race_id}.pap".to_string(),
                "second/{race_id}.pap".to_string(),
            ],
            applied_races: selection(&[("Midlander M", "c0101"), ("Elezen M", "c0501")]),
            option_races: selection(&[("Viera M", "c1701")]),
        };

        let options = build_swap_options(&parameters, "01");
        let keys: Vec<&str> = options[0].file_swaps.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "first/c0101.pap",
                "first/c0501.pap",
                "second/c0101.pap",
                "second/c0501.pap",
            ],
            "Key order should iterate templates outer and source races inner"
        );
    }

    #[test]
    fn test_single_mode_prepends_off_option() {
        let parameters = SwapParameters {
            group_name: "pose".to_string(),
            group_type: GroupType::Single,
            templates: vec!["a/{race_id}.pap".to_string()],
            applied_races: selection(&[("Midlander M", "c0101")]),
            option_races: selection(&[("Highlander M", "c0301")]),
        };

        let options = build_swap_options(&parameters, "01");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Off");
        assert!(options[0].is_empty(), "Off option should carry no mappings");
        assert_eq!(options[1].name, "Highlander M");
    }

    #[test]
    fn test_multi_mode_has_no_off_option() {
        let parameters = SwapParameters {
            group_name: "pose".to_string(),
            group_type: GroupType::Multi,
            templates: vec!["a/{race_id}.pap".to_string()],
            applied_races: selection(&[("Midlander M", "c0101")]),
            option_races: selection(&[("Highlander M", "c0301")]),
        };

        let options = build_swap_options(&parameters, "01");
        assert_eq!(options.len(), 1);
        assert_ne!(options[0].name, "Off");
    }

    #[test]
    fn test_generate_swap_group_names_document_with_variant() {
        let parameters = SwapParameters {
            group_name: "sit".to_string(),
            group_type: GroupType::Multi,
            templates: vec!["a/{race_id}/{variant}.pap".to_string()],
            applied_races: selection(&[("Midlander M", "c0101")]),
            option_races: selection(&[("Midlander M", "c0101")]),
        };

        let (document, file_name) = generate_swap_group(&parameters, "03");
        assert_eq!(document.name, "sit03");
        assert_eq!(file_name, "group_sit03.json");
        assert_eq!(document.group_type, GroupType::Multi);
        assert_eq!(document.default_settings, 1);
    }
}
