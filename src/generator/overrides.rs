//! File-override option builder
//!
//! Places locally supplied files at substituted in-game paths. Each option
//! carries (local file, target template) pairs; the builder crosses them with
//! the applied races, removes the variant placeholder, and maps every target
//! path to the file's staged in-archive location.

use std::path::PathBuf;

use crate::constants::STAGED_FILES_DIR;
use crate::errors::{invalid_filename_error, Result};
use crate::model::{GroupDocument, GroupType, OptionRecord};
use crate::template::substitute;
use crate::utils::sanitize_name;
use crate::RaceSelection;

use super::assemble_group;

/// A locally supplied file and the target-path template it lands at
#[derive(Debug, Clone, PartialEq)]
pub struct OverridePattern {
    pub source: PathBuf,
    pub target: String,
}

/// One user-named option of an override operation
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideOption {
    pub name: String,
    pub patterns: Vec<OverridePattern>,
}

/// Everything a file-override operation needs, captured explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideParameters {
    pub group_name: String,
    pub options: Vec<OverrideOption>,
    /// Races the override applies to; one target path per race and pattern
    pub applied_races: RaceSelection,
}

/// A local file and the relative archive path it gets copied to
#[derive(Debug, Clone, PartialEq)]
pub struct StagedCopy {
    pub source: PathBuf,
    pub archive_path: String,
}

/// Builds the option list and the copy plan for an override group
///
/// A synthetic "Off" option is always prepended. For every applied race and
/// pattern pair the target template is substituted with the race identifier
/// (the variant placeholder is removed) and mapped to the staged location of
/// the local file.
///
/// # Errors
/// Returns an error if a local filename is not valid Unicode
pub fn build_override_options(
    parameters: &OverrideParameters,
) -> Result<(Vec<OptionRecord>, Vec<StagedCopy>)> {
    let mut options = vec![OptionRecord::off()];
    let mut copies = Vec::new();

    for option_config in &parameters.options {
        let mut option = OptionRecord::named(&option_config.name);

        // One staged location per pattern, shared by every applied race
        let mut staged = Vec::new();
        for pattern in &option_config.patterns {
            staged.push(staged_path(
                &parameters.group_name,
                &option_config.name,
                &pattern.source,
            )?);
        }

        for race_id in parameters.applied_races.values() {
            for (pattern, archive_path) in option_config.patterns.iter().zip(&staged) {
                let target_path = substitute(&pattern.target, race_id, "");
                option.files.insert(target_path, archive_path.clone());
            }
        }

        for (pattern, archive_path) in option_config.patterns.iter().zip(staged) {
            copies.push(StagedCopy {
                source: pattern.source.clone(),
                archive_path,
            });
        }
        options.push(option);
    }

    Ok((options, copies))
}

/// Generates the group document, filename, and copy plan for an override
/// group
///
/// Override groups are single-choice and are not repeated per variant.
pub fn generate_override_group(
    parameters: &OverrideParameters,
) -> Result<(GroupDocument, String, Vec<StagedCopy>)> {
    let (options, copies) = build_override_options(parameters)?;
    let (document, file_name) =
        assemble_group(&parameters.group_name, "", GroupType::Single, options);
    Ok((document, file_name, copies))
}

/// Computes the in-archive location a local file is staged at
fn staged_path(group_name: &str, option_name: &str, source: &PathBuf) -> Result<String> {
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid_filename_error(source.clone()))?;
    Ok(format!(
        "{}/{}/{}/{}",
        STAGED_FILES_DIR,
        sanitize_name(group_name),
        sanitize_name(option_name),
        file_name
    )
    .to_lowercase())
}
