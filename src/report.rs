//! Check and Timing Reports
//!
//! Collects the outcome of the built-in check cases and, optionally, timing
//! rows from a benchmark run, and renders them in one of three formats:
//!
//! - plain text, one `name ... PASS` / `name ... FAIL: actual != expected` line
//!   per case
//! - Links Notation, an indentation based `name value` format:
//!   ```text
//!   check_report:
//!     timestamp '2026-10-18T09:30:00Z'
//!   ```
//! - a Markdown summary table

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::check::{CheckCase, Outcome};

/// Output format for a [`CheckReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Lino,
    Markdown,
}

/// Timing of one transform at one array size
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// "product_except_self" or "merge_sorted"
    pub transform: String,
    /// Total number of input elements
    pub array_size: usize,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Whether the output passed verification
    pub verified: bool,
}

/// A complete report
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// RFC 3339 UTC timestamp of when the report was created
    pub timestamp: String,
    pub description: String,
    pub cases: Vec<CheckCase>,
    pub timings: Vec<BenchmarkResult>,
}

impl CheckReport {
    /// Create a new empty report
    pub fn new(description: &str) -> Self {
        CheckReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: description.to_string(),
            cases: Vec::new(),
            timings: Vec::new(),
        }
    }

    /// Create a report holding already-run cases
    pub fn from_cases(description: &str, cases: Vec<CheckCase>) -> Self {
        CheckReport {
            cases,
            ..Self::new(description)
        }
    }

    pub fn add_timing(&mut self, result: BenchmarkResult) {
        self.timings.push(result);
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    /// True when every case passed and every timing row verified.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.timings.iter().all(|t| t.verified)
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Lino => self.to_lino(),
            ReportFormat::Markdown => self.to_markdown_table(),
        }
    }

    /// One line per case in the `desc ... PASS` console format
    pub fn to_text(&self) -> String {
        render_with(|output| {
            for case in &self.cases {
                match &case.outcome {
                    Outcome::Pass => writeln!(output, "{} ... PASS", case.name)?,
                    Outcome::Fail { expected, actual } => writeln!(
                        output,
                        "{} ... FAIL: {} != {}",
                        case.name, actual, expected
                    )?,
                }
            }
            for timing in &self.timings {
                writeln!(
                    output,
                    "{} n={} ... {:.3} ms{}",
                    timing.transform,
                    timing.array_size,
                    timing.time_ms,
                    if timing.verified { "" } else { " (UNVERIFIED)" }
                )?;
            }
            Ok(())
        })
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        render_with(|output| {
            writeln!(output, "check_report:")?;
            writeln!(output, "  timestamp '{}'", self.timestamp)?;
            writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;
            writeln!(output, "  passed {}", self.passed())?;
            writeln!(output, "  failed {}", self.failed())?;

            if !self.cases.is_empty() {
                writeln!(output)?;
                writeln!(output, "results:")?;
                for case in &self.cases {
                    writeln!(output, "  '{}':", escape_lino_string(case.name))?;
                    writeln!(output, "    group {}", case.group)?;
                    match &case.outcome {
                        Outcome::Pass => writeln!(output, "    status pass")?,
                        Outcome::Fail { expected, actual } => {
                            writeln!(output, "    status fail")?;
                            writeln!(output, "    expected '{}'", escape_lino_string(expected))?;
                            writeln!(output, "    actual '{}'", escape_lino_string(actual))?;
                        }
                    }
                }
            }

            if !self.timings.is_empty() {
                writeln!(output)?;
                writeln!(output, "timings:")?;
                for size in self.sizes() {
                    writeln!(output, "  size_{}:", size)?;
                    for timing in self.timings.iter().filter(|t| t.array_size == size) {
                        writeln!(output, "    {}:", timing.transform)?;
                        writeln!(output, "      time_ms {:.3}", timing.time_ms)?;
                        writeln!(output, "      verified {}", timing.verified)?;
                    }
                }
            }
            Ok(())
        })
    }

    /// Generate a markdown summary from the report
    pub fn to_markdown_table(&self) -> String {
        render_with(|output| {
            writeln!(output, "# Array Transforms Report")?;
            writeln!(output)?;
            writeln!(output, "**Timestamp:** {}", self.timestamp)?;
            writeln!(output, "**Description:** {}", self.description)?;
            writeln!(output)?;

            if !self.cases.is_empty() {
                writeln!(output, "## Check Cases")?;
                writeln!(output)?;
                writeln!(output, "| Group | Case | Status | Detail |")?;
                writeln!(output, "|-------|------|--------|--------|")?;
                for case in &self.cases {
                    let (status, detail) = match &case.outcome {
                        Outcome::Pass => ("PASS", String::new()),
                        Outcome::Fail { expected, actual } => {
                            ("FAIL", format!("`{}` != `{}`", actual, expected))
                        }
                    };
                    writeln!(
                        output,
                        "| {} | {} | {} | {} |",
                        escape_markdown_cell(case.group),
                        escape_markdown_cell(case.name),
                        status,
                        escape_markdown_cell(&detail)
                    )?;
                }
                writeln!(output)?;
                writeln!(output, "**Passed:** {} / {}", self.passed(), self.cases.len())?;
                writeln!(output)?;
            }

            if !self.timings.is_empty() {
                writeln!(output, "## Timings")?;
                writeln!(output)?;
                writeln!(output, "| Size | product_except_self (ms) | merge_sorted (ms) |")?;
                writeln!(output, "|------|--------------------------|-------------------|")?;
                for size in self.sizes() {
                    let cell = |transform: &str| {
                        self.timings
                            .iter()
                            .find(|t| t.array_size == size && t.transform == transform)
                            .map(|t| format!("{:.3}", t.time_ms))
                            .unwrap_or_else(|| "N/A".to_string())
                    };
                    writeln!(
                        output,
                        "| {} | {} | {} |",
                        format_size(size),
                        cell("product_except_self"),
                        cell("merge_sorted")
                    )?;
                }
                writeln!(output)?;
            }

            writeln!(output, "---")?;
            writeln!(output, "*Report generated by array-transforms*")?;
            Ok(())
        })
    }

    /// Save the report to a file in the given format
    pub fn save(&self, path: &Path, format: ReportFormat) -> io::Result<()> {
        fs::write(path, self.render(format))
    }

    /// Distinct timing sizes in ascending order
    fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.timings.iter().map(|t| t.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

fn render_with(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = f(&mut output);
    output
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Escape a string for use inside a Markdown table cell
fn escape_markdown_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Format a size with a binary suffix when it is an exact multiple
/// (e.g., 4096 as "4K", 1 << 20 as "1M"); other sizes print in full.
pub fn format_size(size: usize) -> String {
    const UNITS: [(usize, &str); 3] = [(1 << 30, "G"), (1 << 20, "M"), (1 << 10, "K")];

    UNITS
        .iter()
        .find(|&&(unit, _)| size >= unit && size % unit == 0)
        .map(|&(unit, suffix)| format!("{}{}", size / unit, suffix))
        .unwrap_or_else(|| size.to_string())
}
