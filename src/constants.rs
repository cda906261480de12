/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Placeholder replaced with a race identifier in path templates
pub const RACE_PLACEHOLDER: &str = "{race_id}";

/// Placeholder replaced with a two-digit variant index in path templates
pub const VARIANT_PLACEHOLDER: &str = "{variant}";

/// Prefix shared by every generated group document filename
pub const GROUP_FILE_PREFIX: &str = "group_";

/// Filename of the package metadata document
pub const META_FILE: &str = "meta.json";

/// Filename of the empty default-options document
pub const DEFAULT_MOD_FILE: &str = "default_mod.json";

/// Directory inside the archive where override files are staged
pub const STAGED_FILES_DIR: &str = "files";

/// Extension of the finished mod package
pub const PACKAGE_EXTENSION: &str = "pmp";

/// Extension of the intermediate archive before it is renamed into place
pub const ARCHIVE_EXTENSION: &str = "zip";

/// FileVersion written into the metadata document
pub const META_FILE_VERSION: u32 = 3;

/// Version written into every group document
pub const GROUP_VERSION: u32 = 0;

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "net";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Mira Halvorsen";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "path_mapper";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read the packaging job from a specific config file";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Write the finished package to this directory";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Validate the job and report the plan without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file next to the executable instead of the config directory";

/// Default path for the job configuration file
pub const DEFAULT_CONFIG_PATH: &str = "pack.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "pmapper.log";
