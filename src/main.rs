use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use path_mapper::prelude::*;

fn main() -> Result<()> {
    let matches = get_arguments()?;
    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let options = PackagingOptions::from_matches(&matches);

    match run_packaging(&options) {
        Ok(report) => {
            report_success(&report, options.dry_run);
            check_for_stdout_stream();
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            check_for_stdout_stream();
            Err(e.into())
        }
    }
}

fn report_success(report: &PackagingReport, dry_run: bool) {
    if dry_run {
        return;
    }
    let path = report.package_path.display().to_string();
    let message = format!("Generated mod package: {path}");
    let colored_message = format!("Generated mod package: {}", path.green());
    info!("{}", format_message(&message, &colored_message));
    if report.skipped_files > 0 {
        info!(
            "{} file mapping(s) were skipped because their local file could not be copied",
            report.skipped_files
        );
    }
}
