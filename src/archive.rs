//! Package archiving
//!
//! Zips the staging tree and renames the archive to the Penumbra package
//! extension. Finalisation is last-writer-wins: a pre-existing package with
//! the same name is removed, no backup.

use std::fs::{read_dir, remove_file, rename, File};
use std::io::copy;
use std::path::{Path, PathBuf};

use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::{archive_error, file_operation_error, invalid_filename_error, Result};
use crate::utils::sanitize_name;

/// Strips filesystem-unsafe characters from the mod name for use as the
/// package filename
pub fn sanitize_mod_name(name: &str) -> String {
    sanitize_name(name)
}

/// Creates a deflate-compressed zip archive from the staging directory
///
/// Every file under `staging` is stored with its forward-slash relative path;
/// directories are implicit.
pub fn create_archive(staging: &Path, zip_path: &Path) -> Result<()> {
    let archive_file = File::create(zip_path)
        .map_err(|e| file_operation_error(e, zip_path.to_path_buf(), "create"))?;
    let mut writer = ZipWriter::new(archive_file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    collect_files(staging, &mut entries)?;

    for entry in entries {
        let name = relative_archive_name(staging, &entry)?;
        debug!("Archiving: {name}");
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| archive_error(e, zip_path.to_path_buf()))?;
        let mut source =
            File::open(&entry).map_err(|e| file_operation_error(e, entry.clone(), "read"))?;
        copy(&mut source, &mut writer)
            .map_err(|e| file_operation_error(e, entry.clone(), "archive"))?;
    }

    writer
        .finish()
        .map_err(|e| archive_error(e, zip_path.to_path_buf()))?;
    Ok(())
}

/// Renames the finished archive to the package path
///
/// A pre-existing package at the target path is unconditionally removed
/// first.
pub fn finalize_package(zip_path: &Path, package_path: &Path) -> Result<()> {
    if package_path.exists() {
        info!(
            "Replacing existing package: {}",
            package_path.display()
        );
        remove_file(package_path)
            .map_err(|e| file_operation_error(e, package_path.to_path_buf(), "remove"))?;
    }
    rename(zip_path, package_path)
        .map_err(|e| file_operation_error(e, zip_path.to_path_buf(), "rename"))?;
    Ok(())
}

/// Recursively collects every file under a directory, depth-first
fn collect_files(directory: &Path, entries: &mut Vec<PathBuf>) -> Result<()> {
    let listing = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;
    for entry in listing {
        let entry =
            entry.map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Converts a staged file path to its forward-slash archive name
fn relative_archive_name(staging: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(staging)
        .map_err(|_| invalid_filename_error(path.to_path_buf()))?;
    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};

    #[test]
    fn test_sanitize_mod_name() {
        assert_eq!(sanitize_mod_name("My Cool Mod!"), "My_Cool_Mod");
        assert_eq!(sanitize_mod_name(" trailing "), "trailing");
    }

    #[test]
    fn test_relative_archive_name_uses_forward_slashes() {
        let staging = Path::new("/staging");
        let path = Path::new("/staging/files/dye/red.tex");
        assert_eq!(
            relative_archive_name(staging, path).unwrap(),
            "files/dye/red.tex"
        );
    }

    #[test]
    fn test_create_archive_round_trip() {
        let staging = tempfile::tempdir().unwrap();
        write(staging.path().join("meta.json"), b"{}").unwrap();
        create_dir_all(staging.path().join("files/dye")).unwrap();
        write(staging.path().join("files/dye/red.tex"), b"pixels").unwrap();

        let out = tempfile::tempdir().unwrap();
        let zip_path = out.path().join("mod.zip");
        create_archive(staging.path(), &zip_path).unwrap();

        let archive_file = File::open(&zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(archive_file).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"meta.json".to_string()));
        assert!(names.contains(&"files/dye/red.tex".to_string()));
    }

    #[test]
    fn test_finalize_package_replaces_existing_file() {
        let out = tempfile::tempdir().unwrap();
        let zip_path = out.path().join("mod.zip");
        let package_path = out.path().join("mod.pmp");
        write(&zip_path, b"new archive").unwrap();
        write(&package_path, b"stale package").unwrap();

        finalize_package(&zip_path, &package_path).unwrap();

        assert!(!zip_path.exists(), "Zip should be renamed away");
        assert_eq!(std::fs::read(&package_path).unwrap(), b"new archive");
    }
}
