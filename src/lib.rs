pub use cli::*;
pub use config::*;
pub use errors::*;

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod indexing;
pub mod logging;
pub mod model;
pub mod packager;
pub mod races;
pub mod template;
mod utils;

pub mod prelude {
    pub use crate::cli::{check_for_stdout_stream, get_arguments, get_log_file, get_verbosity};
    pub use crate::errors::{
        archive_error, config_parsing_error, file_operation_error, generic_error,
        invalid_filename_error, invalid_variant_count_error, missing_field_error,
        missing_local_file_error, no_races_selected_error, serialization_error,
        unknown_race_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::packager::{run_packaging, PackagingOptions, PackagingReport};
}

/// A list of path templates, one template per generated mapping family
pub type TemplateList = Vec<String>;

/// An insertion-ordered selection of races: display label to internal identifier
pub type RaceSelection = indexmap::IndexMap<String, String>;
