//! Shared entry point used by every binary surface.

mod config;
mod run;

pub use run::{run_with_args, run_with_args_to};
