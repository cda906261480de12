//! Packaging workflow
//!
//! This module orchestrates a full packaging run: validate the job, stage
//! every document and local file in a temporary directory, run the group
//! indexing pass, and archive the result as a Penumbra package. Everything is
//! synchronous; the first failure outside the override copy step aborts the
//! run.

use std::fs::{copy, create_dir_all};
use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info, warn};
use tempfile::tempdir;

use crate::archive::{create_archive, finalize_package, sanitize_mod_name};
use crate::config::{load_config, GroupConfig, OverrideGroupConfig, PackConfig, SwapGroupConfig};
use crate::constants::{
    ARCHIVE_EXTENSION, DEFAULT_CONFIG_PATH, DEFAULT_MOD_FILE, META_FILE, PACKAGE_EXTENSION,
};
use crate::errors::{file_operation_error, Result};
use crate::generator::{
    generate_override_group, generate_swap_group, GeneratedFile, OverrideOption,
    OverrideParameters, OverridePattern, StagedCopy, SwapParameters,
};
use crate::indexing::{apply_group_indexes, assign_group_indexes, indexed_filename};
use crate::model::{DefaultModDocument, MetaDocument};
use crate::races::resolve_races;
use crate::template::format_variant;
use crate::utils::write_json_document;

/// Options for a packaging run
#[derive(Debug, Clone)]
pub struct PackagingOptions {
    /// Path to the job configuration file
    pub config_path: PathBuf,
    /// Output directory override from the command line
    pub output_override: Option<PathBuf>,
    /// Whether to only validate and report the plan
    pub dry_run: bool,
}

impl PackagingOptions {
    /// Builds packaging options from parsed command-line arguments
    pub fn from_matches(matches: &ArgMatches) -> PackagingOptions {
        let config_path = matches
            .get_one::<String>("config")
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONFIG_PATH);
        PackagingOptions {
            config_path: PathBuf::from(shellexpand::tilde(config_path).to_string()),
            output_override: matches
                .get_one::<String>("output")
                .map(|value| PathBuf::from(shellexpand::tilde(value).to_string())),
            dry_run: matches.get_flag("dry"),
        }
    }
}

/// Summary of a finished (or planned) packaging run
#[derive(Debug, Clone)]
pub struct PackagingReport {
    /// Where the finished package lives (or would live, on a dry run)
    pub package_path: PathBuf,
    /// Final indexed filenames of every group document
    pub documents: Vec<String>,
    /// Number of local files staged into the archive
    pub staged_files: usize,
    /// Number of file-mapping pairs skipped because a copy failed
    pub skipped_files: usize,
}

/// One planned generation operation with its races resolved
enum GroupPlan {
    Swap { parameters: SwapParameters, variants: u32 },
    Override { parameters: OverrideParameters },
}

/// Runs a full packaging job based on the given options
///
/// The workflow steps:
/// 1. Read and validate the job configuration
/// 2. Resolve every race selection against the race table
/// 3. Write the metadata and default-options documents to a staging area
/// 4. Generate and write every group document, copying override files in
/// 5. Assign group indexes and rename the staged documents
/// 6. Archive the staging area and rename the archive into place
///
/// On a dry run only steps 1 and 2 touch anything, and the report carries
/// the filenames that would have been produced.
pub fn run_packaging(options: &PackagingOptions) -> Result<PackagingReport> {
    // Step 1: Read and validate the configuration
    let config = load_config(&options.config_path)?;
    config.validate()?;

    let output_dir = options
        .output_override
        .clone()
        .unwrap_or_else(|| config.output_dir());
    let package_name = sanitize_mod_name(&config.name);
    let package_path = output_dir.join(format!("{package_name}.{PACKAGE_EXTENSION}"));

    // Step 2: Resolve race selections into generation parameters
    let plans = plan_groups(&config)?;

    if options.dry_run {
        let documents = planned_documents(&plans);
        info!("Dry run: would write {} group documents", documents.len());
        for document in &documents {
            info!("  {document}");
        }
        info!("Dry run: would produce {}", package_path.display());
        return Ok(PackagingReport {
            package_path,
            documents,
            staged_files: 0,
            skipped_files: 0,
        });
    }

    // Step 3: Stage the fixed documents
    let staging = tempdir().map_err(|e| {
        file_operation_error(e, PathBuf::from("<staging>"), "create staging directory for")
    })?;
    debug!("Staging area: {}", staging.path().display());

    let meta = MetaDocument::new(
        &config.name,
        &config.author,
        &config.description,
        &config.version,
        &config.website,
    );
    write_json_document(&staging.path().join(META_FILE), &meta)?;
    write_json_document(
        &staging.path().join(DEFAULT_MOD_FILE),
        &DefaultModDocument::default(),
    )?;

    // Step 4: Generate and write every group document
    let mut generated: Vec<GeneratedFile> = Vec::new();
    let mut staged_files = 0;
    let mut skipped_files = 0;

    for plan in &plans {
        match plan {
            GroupPlan::Swap {
                parameters,
                variants,
            } => {
                for index in 1..=*variants {
                    let variant = format_variant(index);
                    let (document, file_name) = generate_swap_group(parameters, &variant);
                    let file_path = staging.path().join(&file_name);
                    write_json_document(&file_path, &document)?;
                    debug!("Wrote group document: {file_name}");
                    generated.push(GeneratedFile {
                        file_path,
                        group_name: parameters.group_name.clone(),
                        variant,
                    });
                }
            }
            GroupPlan::Override { parameters } => {
                let (mut document, file_name, copies) = generate_override_group(parameters)?;

                // Best-effort staging: a failed copy skips that one
                // file-mapping pair instead of aborting the run
                let mut failed = Vec::new();
                for planned_copy in &copies {
                    match stage_local_file(staging.path(), planned_copy) {
                        Ok(()) => staged_files += 1,
                        Err(error) => {
                            warn!(
                                "Skipping file mapping for {}: {error}",
                                planned_copy.source.display()
                            );
                            failed.push(planned_copy.archive_path.clone());
                            skipped_files += 1;
                        }
                    }
                }
                if !failed.is_empty() {
                    for option in &mut document.options {
                        option.files.retain(|_, staged| !failed.contains(staged));
                    }
                }

                let file_path = staging.path().join(&file_name);
                write_json_document(&file_path, &document)?;
                debug!("Wrote group document: {file_name}");
                generated.push(GeneratedFile {
                    file_path,
                    group_name: parameters.group_name.clone(),
                    variant: String::new(),
                });
            }
        }
    }

    // Step 5: Assign group indexes and rename the documents
    let renamed = apply_group_indexes(&generated)?;
    let documents = renamed
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .map(str::to_string)
        .collect();

    // Step 6: Archive the staging area and move the package into place
    create_dir_all(&output_dir)
        .map_err(|e| file_operation_error(e, output_dir.clone(), "create output directory"))?;
    let zip_path = output_dir.join(format!("{package_name}.{ARCHIVE_EXTENSION}"));
    create_archive(staging.path(), &zip_path)?;
    finalize_package(&zip_path, &package_path)?;
    debug!("Package finalized at {}", package_path.display());

    Ok(PackagingReport {
        package_path,
        documents,
        staged_files,
        skipped_files,
    })
}

/// Resolves the configured groups into generation parameters
fn plan_groups(config: &PackConfig) -> Result<Vec<GroupPlan>> {
    let mut plans = Vec::with_capacity(config.groups.len());
    for group in &config.groups {
        debug!("Planning group '{}'", group.name());
        match group {
            GroupConfig::Swap(group) => plans.push(plan_swap_group(group)?),
            GroupConfig::Override(group) => plans.push(plan_override_group(group)?),
        }
    }
    Ok(plans)
}

fn plan_swap_group(group: &SwapGroupConfig) -> Result<GroupPlan> {
    Ok(GroupPlan::Swap {
        parameters: SwapParameters {
            group_name: group.name.clone(),
            group_type: group.kind.to_group_type(),
            templates: group.templates.clone(),
            applied_races: resolve_races(group.effective_applied_races())?,
            option_races: resolve_races(group.effective_option_races())?,
        },
        variants: group.variants,
    })
}

fn plan_override_group(group: &OverrideGroupConfig) -> Result<GroupPlan> {
    Ok(GroupPlan::Override {
        parameters: OverrideParameters {
            group_name: group.name.clone(),
            options: group
                .options
                .iter()
                .map(|option| OverrideOption {
                    name: option.name.clone(),
                    patterns: option
                        .files
                        .iter()
                        .map(|pair| OverridePattern {
                            source: pair.source.clone(),
                            target: pair.target.clone(),
                        })
                        .collect(),
                })
                .collect(),
            applied_races: resolve_races(&group.races)?,
        },
    })
}

/// Copies one local file to its staged location inside the staging area
fn stage_local_file(staging: &std::path::Path, planned_copy: &StagedCopy) -> std::io::Result<()> {
    let destination = staging.join(&planned_copy.archive_path);
    if let Some(parent) = destination.parent() {
        create_dir_all(parent)?;
    }
    copy(&planned_copy.source, &destination)?;
    Ok(())
}

/// Computes the final indexed filenames a run would produce, without writing
fn planned_documents(plans: &[GroupPlan]) -> Vec<String> {
    let mut files = Vec::new();
    for plan in plans {
        match plan {
            GroupPlan::Swap {
                parameters,
                variants,
            } => {
                for index in 1..=*variants {
                    let variant = format_variant(index);
                    files.push(GeneratedFile {
                        file_path: PathBuf::from(format!(
                            "group_{}{}.json",
                            parameters.group_name, variant
                        )),
                        group_name: parameters.group_name.clone(),
                        variant,
                    });
                }
            }
            GroupPlan::Override { parameters } => {
                files.push(GeneratedFile {
                    file_path: PathBuf::from(format!("group_{}.json", parameters.group_name)),
                    group_name: parameters.group_name.clone(),
                    variant: String::new(),
                });
            }
        }
    }

    let indexes = assign_group_indexes(&files);
    files
        .iter()
        .map(|file| {
            let name = file.file_path.to_string_lossy();
            indexed_filename(&name, indexes[&file.group_name])
        })
        .collect()
}
