use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for tgen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template file, local or packaged.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: String,

    /// Variables files or directories (comma-separated).
    #[arg(short, long, value_name = "PATHS", value_delimiter = ',', required = true)]
    pub variables: Vec<String>,

    /// Base output path handed to the template.
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Combine all variables files into a single context.
    #[arg(short, long)]
    pub combine: bool,

    /// Extra resource directories or .zip archives searched when a path is not found locally (comma-separated).
    #[arg(short, long, value_name = "PATHS", value_delimiter = ',')]
    pub resources: Vec<PathBuf>,

    /// Render and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`--verbose`, repeat for more).
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `--verbose` counts to the appropriate log level. Warnings are always shown.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Warn);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_required_args() {
        let args = Args::parse_from(["tgen", "-t", "TEMPLATE", "-v", "VARIABLES", "-o", "OUTPUT"]);
        assert_eq!(args.template, "TEMPLATE");
        assert_eq!(args.variables, vec!["VARIABLES"]);
        assert_eq!(args.output, PathBuf::from("OUTPUT"));
        assert!(!args.combine);
    }

    #[test]
    fn parses_combine_and_comma_separated_paths() {
        let args = Args::parse_from([
            "tgen",
            "--template",
            "t.j2",
            "--variables",
            "variables/users,variables/groups.yml",
            "--output",
            "out",
            "-c",
            "--resources",
            "bundle.zip,shared",
            "--dry-run",
            "--verbose",
            "--verbose",
        ]);
        assert_eq!(args.variables, vec!["variables/users", "variables/groups.yml"]);
        assert!(args.combine);
        assert_eq!(args.resources, vec![PathBuf::from("bundle.zip"), PathBuf::from("shared")]);
        assert!(args.dry_run);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_parameters() {
        assert!(Args::try_parse_from(["tgen", "Unknown parameters"]).is_err());
    }

    #[test]
    fn requires_variables() {
        let err = Args::try_parse_from(["tgen", "-t", "t.j2", "-o", "out"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
