//! Job configuration
//!
//! The packaging job arrives as a YAML document: mod metadata plus a list of
//! generation operations. Everything the generators need is captured here
//! explicitly so that no interactive state leaks into generation logic.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{
    config_parsing_error, file_operation_error, invalid_variant_count_error, missing_field_error,
    no_races_selected_error, Result,
};
use crate::model::GroupType;
use crate::races::resolve_races;
use crate::TemplateList;

/// The whole packaging job: mod metadata plus generation operations
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PackConfig {
    pub name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub website: String,
    /// Output directory for the finished package, tilde-expanded
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

fn default_output() -> String {
    String::from(".")
}

/// One generation operation, discriminated by its `mode` field
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GroupConfig {
    /// Redirect in-game paths between races, repeated per variant
    Swap(SwapGroupConfig),
    /// Place locally supplied files at substituted in-game paths
    Override(OverrideGroupConfig),
}

impl GroupConfig {
    pub fn name(&self) -> &str {
        match self {
            GroupConfig::Swap(group) => &group.name,
            GroupConfig::Override(group) => &group.name,
        }
    }
}

/// How the options of a generated group combine, as written in the config
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    #[default]
    Multi,
    Single,
}

impl GroupKind {
    pub fn to_group_type(self) -> GroupType {
        match self {
            GroupKind::Multi => GroupType::Multi,
            GroupKind::Single => GroupType::Single,
        }
    }
}

/// Configuration for a file-swap operation
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SwapGroupConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: GroupKind,
    pub variants: u32,
    pub templates: TemplateList,
    /// Race labels used for both sides unless overridden below
    #[serde(default)]
    pub races: Vec<String>,
    /// Source-side races the swap applies to; defaults to `races`
    #[serde(default)]
    pub applied_races: Vec<String>,
    /// Target-side races that become options; defaults to `races`
    #[serde(default)]
    pub option_races: Vec<String>,
}

impl SwapGroupConfig {
    /// The effective source-side race labels
    pub fn effective_applied_races(&self) -> &[String] {
        if self.applied_races.is_empty() {
            &self.races
        } else {
            &self.applied_races
        }
    }

    /// The effective target-side race labels
    pub fn effective_option_races(&self) -> &[String] {
        if self.option_races.is_empty() {
            &self.races
        } else {
            &self.option_races
        }
    }
}

/// Configuration for a file-override operation
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OverrideGroupConfig {
    pub name: String,
    pub races: Vec<String>,
    pub options: Vec<OverrideOptionConfig>,
}

/// One user-named option of an override operation
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OverrideOptionConfig {
    pub name: String,
    pub files: Vec<PatternPair>,
}

/// A locally supplied file and the target-path template it lands at
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PatternPair {
    pub source: PathBuf,
    pub target: String,
}

/// Loads and parses the job configuration from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid YAML
pub fn load_config(path: &Path) -> Result<PackConfig> {
    let content = read_to_string(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read config"))?;
    serde_yaml::from_str(&content)
        .map_err(|e| config_parsing_error(e, &format!("invalid job file: {}", path.display())))
}

impl PackConfig {
    /// The output directory with `~` expanded
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output).to_string())
    }

    /// Validates the whole job before any file I/O happens
    ///
    /// Checks required metadata fields, per-group constraints, race labels
    /// against the race table, and the existence of every referenced local
    /// file. The first violation aborts the run.
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("author", &self.author)?;
        require_field("description", &self.description)?;
        require_field("version", &self.version)?;

        if self.groups.is_empty() {
            return Err(missing_field_error("groups"));
        }

        for group in &self.groups {
            match group {
                GroupConfig::Swap(group) => validate_swap_group(group)?,
                GroupConfig::Override(group) => validate_override_group(group)?,
            }
        }

        Ok(())
    }
}

fn require_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(missing_field_error(field));
    }
    Ok(())
}

fn validate_swap_group(group: &SwapGroupConfig) -> Result<()> {
    require_field("group name", &group.name)?;
    if group.templates.is_empty() {
        return Err(missing_field_error(&format!(
            "templates in group '{}'",
            group.name
        )));
    }
    if group.variants < 1 {
        return Err(invalid_variant_count_error(&group.name));
    }
    if group.effective_applied_races().is_empty() || group.effective_option_races().is_empty() {
        return Err(no_races_selected_error(&group.name));
    }
    resolve_races(group.effective_applied_races())?;
    resolve_races(group.effective_option_races())?;
    Ok(())
}

fn validate_override_group(group: &OverrideGroupConfig) -> Result<()> {
    require_field("group name", &group.name)?;
    if group.races.is_empty() {
        return Err(no_races_selected_error(&group.name));
    }
    resolve_races(&group.races)?;
    if group.options.is_empty() {
        return Err(missing_field_error(&format!(
            "options in group '{}'",
            group.name
        )));
    }
    for option in &group.options {
        require_field("option name", &option.name)?;
        if option.files.is_empty() {
            return Err(missing_field_error(&format!(
                "files in option '{}'",
                option.name
            )));
        }
        for pair in &option.files {
            if !pair.source.exists() {
                return Err(crate::errors::missing_local_file_error(
                    pair.source.clone(),
                    &option.name,
                ));
            }
        }
    }
    Ok(())
}
