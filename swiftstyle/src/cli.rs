mod commands;
mod options;

pub use commands::Commands;
pub use options::{FilesArgs, IncludeOptions, OutputOptions, ScanOptions};

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.swiftstyle.toml):
  Create this file in your project root to set defaults.

  [style]
  # Rule categories
  formatting = true          # Whitespace/punctuation layout rules
  safety = true              # Forced unwrap/cast/try rules
  idiom = true               # let-over-var and friends
  naming = true              # Identifier casing rules
  architecture = true        # Clean Architecture layering rules
  include_tests = false      # Include test files in analysis

  # Thresholds
  max_line_length = 120

  # Path filters
  exclude_folders = [\"Generated\", \"ThirdParty\"]
  include_folders = [\"Pods\"]  # Force-include these

  # Rule ignores
  ignore = [\"SWS-F104\"]
  per-file-ignores = { \"Tests/*\" = [\"SWS-S201\"], \"*/AppDelegate.swift\" = [\"SWS-S204\"] }

  # CI/CD
  fail_on_findings = true    # Exit 1 when any finding is reported

  # Clean Architecture layout
  [style.layers]
  domain_dirs = [\"Domain\"]
  data_dirs = [\"Data\"]
  presentation_dirs = [\"Presentation\", \"UI\"]
  domain_allowed_imports = [\"Foundation\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "swiftstyle - Fast Swift style-guide conformance checks for formatting, safety, and architecture",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute (e.g., rules, files).
    pub command: Option<Commands>,

    /// Paths to analyze (files or directories).
    /// Can be a single directory, multiple files, or a mix of both.
    /// When no paths are provided, defaults to the current directory.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Rule category options.
    #[command(flatten)]
    pub scan: ScanOptions,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Include options for additional file types.
    #[command(flatten)]
    pub include: IncludeOptions,

    /// Folders to exclude from analysis.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Folders to force-include in analysis (overrides default exclusions).
    #[arg(long, alias = "include-folder")]
    pub include_folders: Vec<String>,

    /// Set maximum allowed line length (overrides config).
    #[arg(long)]
    pub max_line_length: Option<usize>,
}
