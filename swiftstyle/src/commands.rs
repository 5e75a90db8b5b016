//! Implementations of the metric and catalog subcommands.

use crate::analyzer::traversal::collect_swift_files;
use crate::raw_metrics::analyze_raw;
use crate::rules::rule_registry::all_rule_descriptors;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use rayon::prelude::*;

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Serialize, Clone)]
struct FileMetrics {
    file: String,
    code_lines: usize,
    comment_lines: usize,
    empty_lines: usize,
    total_lines: usize,
    size_kb: f64,
}

/// Executes the files command - shows per-file metrics table.
///
/// # Errors
///
/// Returns an error if file I/O fails or JSON serialization fails.
#[allow(clippy::cast_precision_loss)]
pub fn run_files<W: Write>(
    path: &Path,
    json: bool,
    exclude: &[String],
    mut writer: W,
) -> Result<()> {
    let files = collect_swift_files(path, exclude, &[], false);

    let file_metrics: Vec<FileMetrics> = files
        .par_iter()
        .filter(|p| p.is_file())
        .map(|file_path| {
            let code = fs::read_to_string(file_path).unwrap_or_default();
            let metrics = analyze_raw(&code);
            let size_bytes = fs::metadata(file_path).map(|m| m.len()).unwrap_or(0);
            FileMetrics {
                file: file_path.to_string_lossy().to_string(),
                code_lines: metrics.sloc,
                comment_lines: metrics.comments,
                empty_lines: metrics.blank,
                total_lines: metrics.loc,
                size_kb: size_bytes as f64 / 1024.0,
            }
        })
        .collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&file_metrics)?)?;
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "File",
            "Code",
            "Comments",
            "Empty",
            "Total",
            "Size (KB)",
        ]);

        for f in file_metrics {
            let short_name = Path::new(&f.file)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| f.file.clone());
            table.add_row(vec![
                short_name,
                f.code_lines.to_string(),
                f.comment_lines.to_string(),
                f.empty_lines.to_string(),
                f.total_lines.to_string(),
                format!("{:.2}", f.size_kb),
            ]);
        }

        writeln!(writer, "{table}")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct RuleRow {
    id: &'static str,
    category: &'static str,
    severity: &'static str,
    summary: &'static str,
    docs: &'static str,
}

/// Executes the rules command - lists the full rule catalog.
///
/// # Errors
///
/// Returns an error if writing to the output fails or JSON serialization fails.
pub fn run_rules<W: Write>(json: bool, mut writer: W) -> Result<()> {
    let rows: Vec<RuleRow> = all_rule_descriptors()
        .iter()
        .map(|d| RuleRow {
            id: d.id,
            category: d.category.as_str(),
            severity: d.default_severity.as_str(),
            summary: d.summary,
            docs: d.docs_url,
        })
        .collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        writeln!(writer, "{}", "Rule Catalog".bold().underline())?;
        let mut table = Table::new();
        table.set_header(vec!["ID", "Category", "Severity", "Summary", "Docs"]);
        for row in rows {
            table.add_row(vec![
                row.id,
                row.category,
                row.severity,
                row.summary,
                row.docs,
            ]);
        }
        writeln!(writer, "{table}")?;
    }
    Ok(())
}

/// Writes output to either a file or a writer.
///
/// # Errors
///
/// Returns an error if creating or writing the output file fails.
pub fn write_output<W: Write>(
    writer: &mut W,
    content: &str,
    output_file: Option<String>,
) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{content}")?;
    } else {
        writeln!(writer, "{content}")?;
    }
    Ok(())
}
