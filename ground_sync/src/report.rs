//! Operator-facing run output: banners, the summary block, and the failure
//! report.

use std::{error::Error, fmt, fmt::Write as _};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::sync::coordinator::{CollectionReport, RunReport};

const RULE: &str = "============================================";
const FAIL_RULE: &str = "##############################################";

/// Step of the process a fatal error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initialization,
    DatabaseConnection,
    DataSync,
    DatabaseDisconnection,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Initialization => "initialization",
            Stage::DatabaseConnection => "database connection",
            Stage::DataSync => "data sync",
            Stage::DatabaseDisconnection => "database disconnection",
        })
    }
}

/// `err` and all of its sources joined with `": "`.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        let _ = write!(out, ": {e}");
        cur = e.source();
    }
    out
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn title(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn centered(text: &str) -> String {
    let pad = RULE.len().saturating_sub(text.len()) / 2;
    format!("{}{text}", " ".repeat(pad))
}

pub fn render_start_banner(started_at: DateTime<Utc>) -> String {
    format!(
        "{RULE}\n{}\n{}\n{RULE}\n",
        centered("GROUND CONTROL DATA SYNC"),
        centered(&format!("Started: {}", timestamp(started_at))),
    )
}

fn collection_line(c: &CollectionReport) -> String {
    let mut line = format!(
        "{}: {} synced ({})",
        title(c.kind.name()),
        c.count(),
        c.status().as_str()
    );
    let skipped = c.failures().len();
    if skipped > 0 {
        let _ = write!(line, ", {skipped} skipped");
    }
    line
}

/// The end-of-run summary: one line per collection plus skipped records.
pub fn render_summary(report: &RunReport) -> String {
    let mut out = format!("{RULE}\n{}\n{RULE}\n", centered("SYNC SUMMARY"));
    for c in &report.collections {
        let _ = writeln!(out, "{}", collection_line(c));
        for f in c.failures() {
            let _ = writeln!(out, "  - [{}] {}: {}", f.index, f.label, error_chain(&f.error));
        }
    }
    let _ = writeln!(out, "Finished: {}", timestamp(report.finished_at));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// The failure banner written to stderr before exiting non-zero.
///
/// With a run report, each failed collection gets its own detail section.
pub fn render_failure(stage: Stage, err: &(dyn Error + 'static), report: Option<&RunReport>) -> String {
    let mut out = format!("\n{FAIL_RULE}\n{}\n{FAIL_RULE}\n", centered("SYNC FAILED"));
    let _ = writeln!(out, "Failed during: {stage}");
    let _ = writeln!(out, "Error: {err}");

    match report {
        Some(report) => {
            for c in report.failed() {
                if let Some(e) = c.error() {
                    let _ = writeln!(out, "\n--- {} Error Details ---", title(c.kind.name()));
                    let _ = writeln!(out, "Phase: {}", e.phase());
                    let _ = writeln!(out, "{}", error_chain(e));
                }
            }
        }
        None => {
            if let Some(cause) = err.source() {
                let _ = writeln!(out, "\nCaused by: {}", error_chain(cause));
            }
        }
    }

    out.push_str(FAIL_RULE);
    out.push('\n');
    out
}
