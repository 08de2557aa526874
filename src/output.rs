//! CLI output formatting.
//!
//! Every command renders through a pure `format_*` function returning
//! `Vec<String>`, with a thin `print_*` wrapper that writes to stdout.
//! Format functions do no I/O, so tests assert on lines directly instead
//! of capturing stdout.
//!
//! Display follows a two-level pattern: a section header, then indented
//! entry lines with a zero-padded positional index.
//!
//! ```text
//! Passthrough copies
//!     001 ./src/assets
//!     002 ./src/css/
//! ```

use crate::plan::BuildPlan;
use crate::site::SiteMetadata;
use crate::sources::SourceReport;
use std::path::PathBuf;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

const INDENT: &str = "    ";

fn path_section(lines: &mut Vec<String>, header: &str, paths: &[PathBuf]) {
    lines.push(header.to_string());
    for (i, path) in paths.iter().enumerate() {
        lines.push(format!("{INDENT}{} {}", format_index(i + 1), path.display()));
    }
}

/// Render the effective build plan.
pub fn format_plan(plan: &BuildPlan) -> Vec<String> {
    let mut lines = vec![
        "Directories".to_string(),
        format!("{INDENT}input:  {}", plan.dir().input),
        format!("{INDENT}output: {}", plan.dir().output),
        String::new(),
    ];

    path_section(&mut lines, "Passthrough copies", plan.passthrough_copies());
    lines.push(String::new());
    path_section(&mut lines, "Watch targets", plan.watch_targets());
    lines.push(String::new());

    lines.push("Shortcodes".to_string());
    for (i, name) in plan.shortcodes().names().iter().enumerate() {
        lines.push(format!("{INDENT}{} {}", format_index(i + 1), name));
    }

    lines
}

/// Render the on-disk survey of passthrough sources.
///
/// ```text
/// Passthrough sources
///     001 ./src/assets (14 files, 120.3 KB)
///     002 ./src/css/ (missing)
/// ```
pub fn format_survey(reports: &[SourceReport]) -> Vec<String> {
    let mut lines = vec!["Passthrough sources".to_string()];
    for (i, report) in reports.iter().enumerate() {
        let detail = if report.exists {
            format!(
                "({} {}, {})",
                report.file_count,
                if report.file_count == 1 { "file" } else { "files" },
                format_bytes(report.total_bytes)
            )
        } else {
            "(missing)".to_string()
        };
        lines.push(format!(
            "{INDENT}{} {} {}",
            format_index(i + 1),
            report.source,
            detail
        ));
    }
    lines
}

/// Render the site metadata record.
pub fn format_metadata(meta: &SiteMetadata) -> Vec<String> {
    vec![
        "Site metadata".to_string(),
        format!("{INDENT}url:         {}", meta.url),
        format!("{INDENT}name:        {}", meta.site_name),
        format!("{INDENT}description: {}", meta.site_description),
    ]
}

/// Human-readable byte count: `512 B`, `4.2 KB`, `1.7 MB`.
fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

pub fn print_plan(plan: &BuildPlan) {
    for line in format_plan(plan) {
        println!("{line}");
    }
}

pub fn print_survey(reports: &[SourceReport]) {
    for line in format_survey(reports) {
        println!("{line}");
    }
}

pub fn print_metadata(meta: &SiteMetadata) {
    for line in format_metadata(meta) {
        println!("{line}");
    }
}
