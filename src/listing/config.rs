//! Configuration types for ringls
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - The display flags the lister acts on
//! - Runtime configuration derived from the arguments

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Directory listed when no operands are given.
pub const DEFAULT_PATH: &str = ".";

/// List directory contents, breadth-first
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "ringls",
    version,
    about = "List directory contents, breadth-first",
    after_help = "EXAMPLES:\n    \
        ringls -1 src\n    \
        ringls -la /etc\n    \
        ringls -R -v target"
)]
pub struct CliArgs {
    /// List one entry per line
    #[arg(short = '1')]
    pub one_per_line: bool,

    /// Do not ignore entries starting with '.'
    #[arg(short = 'a', long)]
    pub all: bool,

    /// List subdirectories recursively, breadth-first
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directories to list
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Display flags consulted for every directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// `-R`: descend into subdirectories.
    pub recursive: bool,
    /// `-1`: one name per line.
    pub one_per_line: bool,
    /// `-a`: include hidden names, `.` and `..`.
    pub all: bool,
    /// `-l`: long listing format.
    pub long: bool,
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Display flags.
    pub options: ListOptions,
    /// Operands in command-line order; never empty.
    pub paths: Vec<PathBuf>,
    /// Number of `-v` flags.
    pub verbosity: u8,
}

impl ListConfig {
    /// Builds the runtime configuration, listing `.` when no paths are given.
    pub fn from_args(args: CliArgs) -> Self {
        let paths = if args.paths.is_empty() {
            vec![PathBuf::from(DEFAULT_PATH)]
        } else {
            args.paths
        };

        Self {
            options: ListOptions {
                recursive: args.recursive,
                one_per_line: args.one_per_line,
                all: args.all,
                long: args.long,
            },
            paths,
            verbosity: args.verbose,
        }
    }

    /// `tracing` filter directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "ringls=warn",
            1 => "ringls=info",
            2 => "ringls=debug",
            _ => "ringls=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_short_flags() {
        let args = CliArgs::try_parse_from(["ringls", "-1aRl", "src", "tests"]).unwrap();
        let config = ListConfig::from_args(args);

        assert_eq!(
            config.options,
            ListOptions {
                recursive: true,
                one_per_line: true,
                all: true,
                long: true,
            }
        );
        assert_eq!(config.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
    }

    #[test]
    fn test_default_path() {
        let config = ListConfig::from_args(CliArgs::try_parse_from(["ringls"]).unwrap());
        assert_eq!(config.paths, vec![PathBuf::from(".")]);
        assert_eq!(config.options, ListOptions::default());
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = ListConfig::from_args(CliArgs::default());
        assert_eq!(quiet.log_directive(), "ringls=warn");

        let args = CliArgs::try_parse_from(["ringls", "-vv"]).unwrap();
        assert_eq!(ListConfig::from_args(args).log_directive(), "ringls=debug");

        let args = CliArgs::try_parse_from(["ringls", "-vvvvv"]).unwrap();
        assert_eq!(ListConfig::from_args(args).log_directive(), "ringls=trace");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliArgs::try_parse_from(["ringls", "-z"]).is_err());
    }
}
