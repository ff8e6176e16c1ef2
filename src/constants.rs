//! Constants used throughout the tgen application

/// Variable file extensions accepted by the format filter, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Name of the single result produced in combined mode
pub const COMBINED_NAME: &str = "COMBINED";

/// Reserved template binding holding the output location of the current render
pub const OUTPUT_PATH_VARIABLE: &str = "output_path";

/// Separator between variable paths on the command line
pub const VARIABLES_PATHS_SEPARATOR: char = ',';

/// Resource directory looked up next to the running executable
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Resource archive looked up next to the running executable
pub const DEFAULT_RESOURCES_ARCHIVE: &str = "resources.zip";

/// Extension marking a resource root as a zip archive
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Template filter that attaches its block to an output file
pub const SAVE_FILE_FILTER: &str = "save_file";

/// Template function that aborts rendering with a message
pub const FAIL_FUNCTION: &str = "fail";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
