use std::io::Write;

use sathi_core::{Responder, Result};
use tracing::{debug, info, warn};

use crate::report::{ReportEntry, TestReport, Verdict};
use crate::suite::TestSuite;

/// Runs a suite against a responder, one call per case, in suite order.
pub struct Harness<'a> {
    responder: &'a dyn Responder,
}

impl<'a> Harness<'a> {
    pub fn new(responder: &'a dyn Responder) -> Self {
        Self { responder }
    }

    pub fn run(&self, suite: &TestSuite) -> TestReport {
        let mut entries = Vec::with_capacity(suite.len());

        for (index, case) in suite.iter().enumerate() {
            let response = self.responder.respond(&case.query);
            let verdict = case.expect.as_ref().map(|expected| {
                if *expected == response {
                    Verdict::Pass
                } else {
                    warn!(
                        index,
                        intent = %case.intent,
                        query = %case.query,
                        "Response did not match expectation"
                    );
                    Verdict::Fail
                }
            });
            debug!(index, intent = %case.intent, ?verdict, "Ran test case");

            entries.push(ReportEntry {
                intent: case.intent.clone(),
                query: case.query.clone(),
                response,
                expected: case.expect.clone(),
                verdict,
            });
        }

        let report = TestReport::new(
            suite.name.clone(),
            self.responder.responder_name(),
            entries,
        );
        info!(
            total = report.summary.total,
            checked = report.summary.checked,
            failed = report.summary.failed,
            "Suite finished"
        );
        report
    }

    /// Runs the suite and writes the text report to `out`.
    pub fn run_to<W: Write>(&self, suite: &TestSuite, out: &mut W) -> Result<TestReport> {
        let report = self.run(suite);
        report.render_text(out)?;
        out.flush()?;
        Ok(report)
    }
}
