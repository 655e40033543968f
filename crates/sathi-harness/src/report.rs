//! Harness results and their text/JSON renderings

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sathi_core::Result;

pub const REPORT_BANNER: &str = "=== Scheme Sathi Chatbot Automated Test Report ===";

pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub intent: String,
    pub query: String,
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// Set only when the case carried an expectation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ReportSummary {
    pub fn from_entries(entries: &[ReportEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Self::default()
        };
        for verdict in entries.iter().filter_map(|e| e.verdict) {
            summary.checked += 1;
            match verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => summary.failed += 1,
            }
        }
        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    pub responder: String,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub entries: Vec<ReportEntry>,
}

impl TestReport {
    pub fn new(
        suite: Option<String>,
        responder: impl Into<String>,
        entries: Vec<ReportEntry>,
    ) -> Self {
        Self {
            suite,
            responder: responder.into(),
            generated_at: Utc::now(),
            summary: ReportSummary::from_entries(&entries),
            entries,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    /// Writes the console report to `out`.
    pub fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Console layout: banner, blank line, then one block per entry.
impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_BANNER)?;
        writeln!(f)?;

        let separator = "-".repeat(SEPARATOR_WIDTH);
        for entry in &self.entries {
            writeln!(f, "Test: {}", entry.intent)?;
            writeln!(f, "User Input: {}", entry.query)?;
            writeln!(f, "Bot Output:")?;
            writeln!(f, "{}", entry.response)?;
            if let Some(verdict) = entry.verdict {
                writeln!(f, "Result: {}", verdict.as_str())?;
            }
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}
