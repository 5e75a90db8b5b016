use crate::rules::Finding;
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

fn get_severity_color(severity: &str) -> Color {
    match severity.to_uppercase().as_str() {
        "HIGH" => Color::Red,
        "MEDIUM" => Color::Yellow,
        "LOW" => Color::Blue,
        _ => Color::White,
    }
}

/// Print a list of findings for one category.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_findings(
    writer: &mut impl Write,
    title: &str,
    findings: &[Finding],
) -> std::io::Result<()> {
    if findings.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", title.bold().underline())?;
    let mut table = create_table(vec!["Rule ID", "Message", "Location", "Severity"]);

    for finding in findings {
        let location = format!(
            "{}:{}:{}",
            normalize_display_path(&finding.file),
            finding.line,
            finding.col
        );
        let severity_color = get_severity_color(&finding.severity);

        table.add_row(vec![
            Cell::new(&finding.rule_id).add_attribute(Attribute::Dim),
            Cell::new(&finding.message).add_attribute(Attribute::Bold),
            Cell::new(location),
            Cell::new(&finding.severity).fg(severity_color),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print a list of parse errors.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_parse_errors(
    writer: &mut impl Write,
    errors: &[crate::analyzer::ParseError],
) -> std::io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", "Parse Errors".bold().underline().red())?;
    let mut table = create_table(vec!["File", "Line", "Error"]);

    for error in errors {
        table.add_row(vec![
            Cell::new(normalize_display_path(&error.file)).add_attribute(Attribute::Bold),
            Cell::new(error.line),
            Cell::new(&error.message).fg(Color::Red),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}
