use clap::Args;
use std::path::PathBuf;

/// Options selecting which rule categories run.
///
/// When none of these flags is given, every category runs; passing any flag
/// restricts the run to exactly the flagged categories.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
pub struct ScanOptions {
    /// Run formatting rules (line length, whitespace, braces).
    #[arg(short = 'f', long)]
    pub formatting: bool,

    /// Run optional-safety rules (force unwrap/cast/try, IUO).
    #[arg(short = 's', long)]
    pub safety: bool,

    /// Run idiom rules (prefer let, trailing closures).
    #[arg(short = 'q', long)]
    pub idiom: bool,

    /// Run naming rules (UpperCamelCase / lowerCamelCase).
    #[arg(short = 'n', long)]
    pub naming: bool,

    /// Run Clean Architecture layering rules.
    #[arg(short = 'a', long)]
    pub architecture: bool,
}

impl ScanOptions {
    /// Whether any category flag was passed explicitly.
    #[must_use]
    pub fn any(&self) -> bool {
        self.formatting || self.safety || self.idiom || self.naming || self.architecture
    }
}

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Group findings by file instead of by category.
    #[arg(long)]
    pub grouped: bool,

    /// Enable verbose output for debugging (shows files being analyzed).
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with code 1 if any finding is reported.
    #[arg(long)]
    pub fail_on_findings: bool,

    /// Save output to file instead of stdout.
    #[arg(long, short = 'O')]
    pub output_file: Option<String>,
}

/// Options for including additional files in analysis.
#[derive(Args, Debug, Default, Clone)]
pub struct IncludeOptions {
    /// Include test files (`Tests/`, `*Tests.swift`, `*Spec.swift`) in analysis.
    #[arg(long)]
    pub include_tests: bool,
}

/// Common options for the files subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct FilesArgs {
    /// Path to analyze (optional, defaults to current directory).
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output JSON.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Exclude folders.
    #[arg(long, short = 'e', alias = "exclude-folder")]
    pub exclude: Vec<String>,
}
