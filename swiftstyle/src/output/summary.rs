use crate::analyzer::{AnalysisResult, AnalysisSummary};
use colored::Colorize;
use std::io::Write;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Swift Style Conformance Results       ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print summary with colored "pills".
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary_pills(
    writer: &mut impl Write,
    result: &AnalysisResult,
) -> std::io::Result<()> {
    fn pill(label: &str, count: usize) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().green())
        } else {
            format!("{}: {}", label, count.to_string().red().bold())
        }
    }

    writeln!(
        writer,
        "{}  {}  {}  {}  {}  {}",
        pill("Formatting", result.formatting.len()),
        pill("Safety", result.safety.len()),
        pill("Idiom", result.idiom.len()),
        pill("Naming", result.naming.len()),
        pill("Architecture", result.architecture.len()),
        pill("Parse Errors", result.parse_errors.len()),
    )?;

    writeln!(writer)?;
    Ok(())
}

/// Print analysis statistics (files and lines processed).
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_analysis_stats(
    writer: &mut impl Write,
    summary: &AnalysisSummary,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        format!(
            "Analyzed {} files ({} lines)",
            summary.total_files.to_string().bold(),
            summary.total_lines.to_string().bold()
        )
        .dimmed()
    )?;
    writeln!(writer)?;
    Ok(())
}
