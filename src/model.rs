//! Penumbra document model
//!
//! Serde types for the JSON documents Penumbra reads out of a mod package:
//! the per-group option documents, the package metadata, and the empty
//! default-options document. Field names follow Penumbra's PascalCase schema
//! exactly; `Files` and `FileSwaps` use insertion-ordered maps so generated
//! output is reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{GROUP_VERSION, META_FILE_VERSION};

/// An insertion-ordered path mapping, source path to target path
pub type FileMap = IndexMap<String, String>;

/// How the options of a group combine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupType {
    /// Independent toggles, any subset may be enabled
    Multi,
    /// Mutually exclusive choice, exactly one option is active
    Single,
}

/// A single selectable option within a group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OptionRecord {
    pub name: String,
    pub description: String,
    pub priority: i64,
    /// Target in-package path to locally staged file (override operations)
    pub files: FileMap,
    /// In-game path to in-game path redirections (swap operations)
    pub file_swaps: FileMap,
    pub manipulations: Vec<serde_json::Value>,
}

impl OptionRecord {
    /// Creates an empty option with the given display name
    pub fn named(name: &str) -> OptionRecord {
        OptionRecord {
            name: name.to_string(),
            description: String::new(),
            priority: 0,
            files: FileMap::new(),
            file_swaps: FileMap::new(),
            manipulations: Vec::new(),
        }
    }

    /// Creates the synthetic "Off" option that leaves every asset untouched
    pub fn off() -> OptionRecord {
        OptionRecord::named("Off")
    }

    /// Whether the option carries no mappings at all
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.file_swaps.is_empty() && self.manipulations.is_empty()
    }
}

/// One option group document, `group_*.json` inside the package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GroupDocument {
    pub version: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub page: u32,
    pub priority: i64,
    #[serde(rename = "Type")]
    pub group_type: GroupType,
    pub default_settings: u64,
    pub options: Vec<OptionRecord>,
}

impl GroupDocument {
    /// Wraps an option list into a group document with default presentation
    /// fields
    ///
    /// `DefaultSettings` is 1 for multi groups (first toggle enabled) and 0
    /// for single groups, which selects the leading "Off" option.
    pub fn new(name: &str, group_type: GroupType, options: Vec<OptionRecord>) -> GroupDocument {
        let default_settings = match group_type {
            GroupType::Multi => 1,
            GroupType::Single => 0,
        };
        GroupDocument {
            version: GROUP_VERSION,
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            page: 0,
            priority: 0,
            group_type,
            default_settings,
            options,
        }
    }
}

/// The package metadata document, `meta.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MetaDocument {
    pub file_version: u32,
    pub name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    pub website: String,
    pub mod_tags: Vec<String>,
}

impl MetaDocument {
    pub fn new(
        name: &str,
        author: &str,
        description: &str,
        version: &str,
        website: &str,
    ) -> MetaDocument {
        MetaDocument {
            file_version: META_FILE_VERSION,
            name: name.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            version: version.to_string(),
            website: website.to_string(),
            mod_tags: Vec::new(),
        }
    }
}

/// The empty default-options document, `default_mod.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultModDocument {
    pub files: FileMap,
    pub file_swaps: FileMap,
    pub manipulations: Vec<serde_json::Value>,
    pub name: String,
    pub description: String,
    pub priority: i64,
}

impl Default for DefaultModDocument {
    fn default() -> DefaultModDocument {
        DefaultModDocument {
            files: FileMap::new(),
            file_swaps: FileMap::new(),
            manipulations: Vec::new(),
            name: String::new(),
            description: String::new(),
            priority: 0,
        }
    }
}
