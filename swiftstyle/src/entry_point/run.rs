use crate::cli::{Cli, Commands};
use anyhow::Result;
use clap::Parser;

use crate::constants::PROGRESS_BAR_THRESHOLD;
use crate::entry_point::config::{resolve_category_flag, setup_configuration};

/// Runs the analyzer with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run swiftstyle with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["swiftstyle".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let effective_paths = cli_var.paths.clone();
    let analysis_root = effective_paths
        .first()
        .map_or_else(|| std::path::PathBuf::from("."), Clone::clone);

    let app_config = setup_configuration(&effective_paths, &cli_var);
    let config = app_config.config;
    let exclude_folders = app_config.exclude_folders;
    let include_folders = app_config.include_folders;
    let include_tests = app_config.include_tests;

    if cli_var.output.verbose && !cli_var.output.json {
        eprintln!("[VERBOSE] swiftstyle v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        if let Some(ref command) = cli_var.command {
            eprintln!("[VERBOSE] Executing subcommand: {command:?}");
        }
        eprintln!("[VERBOSE] Global Excludes: {exclude_folders:?}");
        eprintln!();
    }

    if let Some(command) = cli_var.command {
        return match command {
            Commands::Rules { json } => {
                crate::commands::run_rules(json, writer)?;
                Ok(0)
            }
            Commands::Files { args } => {
                let mut all_exclude = exclude_folders;
                all_exclude.extend(args.exclude);
                crate::commands::run_files(&args.path, args.json, &all_exclude, writer)?;
                Ok(0)
            }
        };
    }

    let any_category_flag = cli_var.scan.any();
    let mut analyzer = crate::analyzer::SwiftStyle::new(
        resolve_category_flag(
            cli_var.scan.formatting,
            any_category_flag,
            config.style.formatting,
        ),
        resolve_category_flag(cli_var.scan.safety, any_category_flag, config.style.safety),
        resolve_category_flag(cli_var.scan.idiom, any_category_flag, config.style.idiom),
        resolve_category_flag(cli_var.scan.naming, any_category_flag, config.style.naming),
        resolve_category_flag(
            cli_var.scan.architecture,
            any_category_flag,
            config.style.architecture,
        ),
        include_tests,
        exclude_folders.clone(),
        include_folders,
        config.clone(),
    )
    .with_verbose(cli_var.output.verbose)
    .with_root(analysis_root);

    if !cli_var.output.json {
        crate::output::print_exclusion_list(writer, &exclude_folders).ok();
    }

    // Count files first to create a progress bar with an accurate total.
    let total_files = analyzer.count_files(&effective_paths);
    let progress: Option<indicatif::ProgressBar> = if cli_var.output.json {
        None
    } else if total_files >= PROGRESS_BAR_THRESHOLD {
        Some(crate::output::create_progress_bar(total_files as u64))
    } else {
        Some(crate::output::create_spinner())
    };
    if let Some(ref pb) = progress {
        analyzer.progress_bar = Some(std::sync::Arc::new(pb.clone()));
    }

    let result = analyzer.analyze_paths(&effective_paths);

    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }

    let mut rendered: Vec<u8> = Vec::new();
    if cli_var.output.json {
        rendered.extend(serde_json::to_string_pretty(&result)?.into_bytes());
    } else if cli_var.output.grouped {
        crate::output::print_report_grouped(&mut rendered, &result)?;
        crate::output::print_summary_pills(&mut rendered, &result)?;
        crate::output::print_analysis_stats(&mut rendered, &result.summary)?;
    } else {
        crate::output::print_report(&mut rendered, &result)?;
        crate::output::print_summary_pills(&mut rendered, &result)?;
        crate::output::print_analysis_stats(&mut rendered, &result.summary)?;
    }
    let rendered = String::from_utf8_lossy(&rendered).into_owned();
    crate::commands::write_output(writer, rendered.trim_end_matches('\n'), cli_var.output.output_file)?;

    let fail_on_findings =
        cli_var.output.fail_on_findings || config.style.fail_on_findings.unwrap_or(false);
    if fail_on_findings && result.total_findings() > 0 {
        return Ok(1);
    }
    Ok(0)
}
