use std::fs::create_dir_all;
use std::path::Path;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, serialization_error, Result};

/// Strips filesystem-unsafe characters from a name and replaces spaces with
/// underscores
pub(crate) fn sanitize_name(name: &str) -> String {
    static UNSAFE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[^A-Za-z0-9_\- ]+").expect("Failed to compile regex pattern for sanitize_name")
    });
    UNSAFE_RE
        .replace_all(name, "")
        .trim()
        .replace(' ', "_")
}

/// Serialises a document as indented JSON and writes it to disk
pub(crate) fn write_json_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(document)
        .map_err(|e| serialization_error(e, &path.display().to_string()))?;
    std::fs::write(path, content)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name_strips_unsafe_characters() {
        assert_eq!(sanitize_name("My Mod: Deluxe!"), "My_Mod_Deluxe");
        assert_eq!(sanitize_name("plain-name_01"), "plain-name_01");
    }

    #[test]
    fn test_sanitize_name_trims_before_replacing_spaces() {
        assert_eq!(sanitize_name("  padded name  "), "padded_name");
    }
}
