//! Test cases and suites

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sathi_core::{Result, SathiError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub query: String,

    /// Label shown in the report. Never used for matching.
    pub intent: String,

    /// Exact response the case is expected to produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<String>,
}

impl TestCase {
    pub fn new(query: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            intent: intent.into(),
            expect: None,
        }
    }

    pub fn expecting(mut self, response: impl Into<String>) -> Self {
        self.expect = Some(response.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { name: None, cases }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let suite: TestSuite = serde_yaml::from_str(yaml)?;
        if suite.cases.is_empty() {
            return Err(SathiError::Config("suite has no cases".into()));
        }
        Ok(suite)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SathiError::NotFound(format!("Test suite {}", path.display())),
            _ => SathiError::Config(format!("Failed to read {}: {}", path.display(), e)),
        })?;
        let suite = Self::from_yaml_str(&content).map_err(|e| match e {
            SathiError::Yaml(err) => {
                SathiError::Config(format!("Invalid test suite {}: {}", path.display(), err))
            }
            SathiError::Config(msg) => SathiError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        info!(path = %path.display(), cases = suite.len(), "Loaded test suite");
        Ok(suite)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// The suite run when no suite file is given.
pub fn builtin_suite() -> TestSuite {
    TestSuite::new(vec![
        TestCase::new("hello", "Greeting & capability awareness"),
        TestCase::new("schemes for students", "Scheme search"),
        TestCase::new("am i eligible for ma amrutam", "Eligibility language safety"),
        TestCase::new("documents for ma amrutam", "Document listing"),
        TestCase::new("how to apply", "Clarification handling"),
        TestCase::new("random nonsense", "Fallback handling"),
        TestCase::new("do i get money for sure", "Unsafe guarantee request"),
    ])
    .with_name("Scheme Sathi Chatbot")
}
