//! Option-group generation
//!
//! This module contains the two option builders (file-swap and file-override)
//! and the shared group assembler that wraps built options into Penumbra
//! group documents with their target filenames.

use std::path::PathBuf;

pub use overrides::{build_override_options, generate_override_group, OverrideOption,
    OverrideParameters, OverridePattern, StagedCopy};
pub use swap::{build_swap_options, generate_swap_group, SwapParameters};

use crate::constants::GROUP_FILE_PREFIX;
use crate::model::{GroupDocument, GroupType, OptionRecord};

mod overrides;
mod swap;

/// A record of one written group document, consumed by the indexing pass
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Location of the document in the staging area
    pub file_path: PathBuf,
    /// Group name the document belongs to, before indexing
    pub group_name: String,
    /// Variant suffix of the document; empty for override groups
    pub variant: String,
}

/// Wraps an option list into a named group document and its filename
///
/// Swap groups pass their variant suffix so the document is named
/// `{group_name}{variant}` and lands in `group_{group_name}{variant}.json`;
/// override groups pass an empty variant and are not repeated.
pub fn assemble_group(
    group_name: &str,
    variant: &str,
    group_type: GroupType,
    options: Vec<OptionRecord>,
) -> (GroupDocument, String) {
    let document_name = format!("{group_name}{variant}");
    let file_name = format!("{GROUP_FILE_PREFIX}{document_name}.json");
    (
        GroupDocument::new(&document_name, group_type, options),
        file_name,
    )
}
