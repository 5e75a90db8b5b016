use super::options::FilesArgs;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// List the full rule catalog (IDs, categories, severities)
    Rules {
        /// Output JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
    /// Show per-file metrics table (code, comments, empty lines, size)
    Files {
        /// Common file metric arguments
        #[command(flatten)]
        args: FilesArgs,
    },
}
