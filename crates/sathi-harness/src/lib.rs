//! Automated report harness for the Scheme Sathi chatbot

pub mod report;
pub mod runner;
pub mod suite;

pub use report::{REPORT_BANNER, ReportEntry, ReportSummary, SEPARATOR_WIDTH, TestReport, Verdict};
pub use runner::Harness;
pub use suite::{TestCase, TestSuite, builtin_suite};
