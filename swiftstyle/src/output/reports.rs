use crate::analyzer::AnalysisResult;
use crate::utils::normalize_display_path;
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use super::summary::print_header;
use super::tables::{print_findings, print_parse_errors};

/// Print the full report, one table per rule category.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_report(writer: &mut impl Write, result: &AnalysisResult) -> std::io::Result<()> {
    print_header(writer)?;

    if result.total_findings() + result.parse_errors.len() == 0 {
        writeln!(writer, "{}", "✓ All clean! No style issues found.".green())?;
        return Ok(());
    }

    print_findings(writer, "Formatting", &result.formatting)?;
    print_findings(writer, "Optional Safety", &result.safety)?;
    print_findings(writer, "Idiom", &result.idiom)?;
    print_findings(writer, "Naming", &result.naming)?;
    print_findings(writer, "Architecture", &result.architecture)?;
    print_parse_errors(writer, &result.parse_errors)?;
    Ok(())
}

/// Print findings grouped by file instead of by category.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report_grouped(
    writer: &mut impl Write,
    result: &AnalysisResult,
) -> std::io::Result<()> {
    print_header(writer)?;
    let mut grouped: BTreeMap<String, Vec<(usize, String, String)>> = BTreeMap::new();

    let mut add = |file: &Path, line: usize, msg: String, severity: &str| {
        grouped
            .entry(file.to_string_lossy().into_owned())
            .or_default()
            .push((line, msg, severity.to_owned()));
    };

    for (label, findings) in [
        ("FORMAT", &result.formatting),
        ("SAFETY", &result.safety),
        ("IDIOM", &result.idiom),
        ("NAMING", &result.naming),
        ("ARCH", &result.architecture),
    ] {
        for finding in findings {
            add(
                &finding.file,
                finding.line,
                format!("[{label}] {} ({})", finding.message, finding.rule_id),
                &finding.severity,
            );
        }
    }
    for error in &result.parse_errors {
        add(
            &error.file,
            error.line,
            format!("[ERROR] Parse Error: {}", error.message),
            "HIGH",
        );
    }

    for (file, mut issues) in grouped {
        issues.sort_by(|a, b| a.0.cmp(&b.0));
        writeln!(
            writer,
            "\nFile: {}",
            normalize_display_path(Path::new(&file)).bold().underline()
        )?;
        for (line, msg, severity) in issues {
            let color = match severity.to_uppercase().as_str() {
                "HIGH" => colored::Color::Red,
                "MEDIUM" => colored::Color::Yellow,
                "LOW" => colored::Color::Blue,
                _ => colored::Color::White,
            };
            writeln!(
                writer,
                "  Line {}: {}",
                line.to_string().cyan(),
                msg.color(color)
            )?;
        }
    }

    Ok(())
}
