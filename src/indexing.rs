//! Group indexing post-pass
//!
//! After all group documents for a run are written, each distinct group name
//! is assigned a sequential index (starting at 1, in first-encounter order)
//! and every filename gets the zero-padded three-digit index inserted after
//! the `group_` prefix, lower-cased. First-encounter order follows the order
//! the caller generated the groups in; nothing re-sorts it.

use std::fs::rename;
use std::path::PathBuf;

use indexmap::IndexMap;
use log::debug;

use crate::constants::GROUP_FILE_PREFIX;
use crate::errors::{file_operation_error, invalid_filename_error, Result};
use crate::generator::GeneratedFile;

/// Assigns a sequential index to each distinct group name
///
/// Indices start at 1 and increase by one per group name in the order the
/// names are first encountered; repeats keep their first index.
pub fn assign_group_indexes(files: &[GeneratedFile]) -> IndexMap<String, usize> {
    let mut indexes = IndexMap::new();
    for file in files {
        let next = indexes.len() + 1;
        indexes.entry(file.group_name.clone()).or_insert(next);
    }
    indexes
}

/// Rewrites a group document filename with its group index
///
/// Inserts the zero-padded three-digit index immediately after the `group_`
/// prefix and lower-cases the whole filename.
pub fn indexed_filename(file_name: &str, index: usize) -> String {
    let rest = file_name.strip_prefix(GROUP_FILE_PREFIX).unwrap_or(file_name);
    format!("{GROUP_FILE_PREFIX}{index:03}_{rest}").to_lowercase()
}

/// Renames every generated document to its indexed filename
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The new paths, in the original file order
///
/// # Errors
/// Returns an error if a filename is not valid Unicode or a rename fails
pub fn apply_group_indexes(files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let indexes = assign_group_indexes(files);
    let mut renamed = Vec::with_capacity(files.len());

    for file in files {
        let index = indexes[&file.group_name];
        let file_name = file
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(file.file_path.clone()))?;
        let new_name = indexed_filename(file_name, index);
        let new_path = match file.file_path.parent() {
            Some(parent) => parent.join(&new_name),
            None => PathBuf::from(&new_name),
        };

        debug!("Indexing group document: {file_name} -> {new_name}");
        rename(&file.file_path, &new_path)
            .map_err(|e| file_operation_error(e, file.file_path.clone(), "rename"))?;
        renamed.push(new_path);
    }

    Ok(renamed)
}
