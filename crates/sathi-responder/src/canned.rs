use sathi_core::{Responder, Result};
use tracing::debug;

use crate::builtin::builtin_table;
use crate::table::ResponseTable;

/// Answers queries from a fixed [`ResponseTable`].
#[derive(Debug, Clone)]
pub struct CannedResponder {
    name: String,
    table: ResponseTable,
}

impl CannedResponder {
    pub fn new(name: impl Into<String>, table: ResponseTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new("scheme-sathi", builtin_table()?))
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }
}

impl Responder for CannedResponder {
    fn respond(&self, query: &str) -> String {
        let matched = self.table.get(query);
        debug!(
            responder = %self.name,
            query,
            matched = matched.is_some(),
            "Responding to query"
        );
        matched.unwrap_or(self.table.fallback()).to_string()
    }

    fn responder_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::FALLBACK_RESPONSE;

    #[test]
    fn test_hello() {
        let responder = CannedResponder::builtin().unwrap();
        assert_eq!(
            responder.respond("hello"),
            "Hi 👋 I’m Scheme Sathi Assistant. I can help you find schemes, check eligibility, required documents, and application steps."
        );
    }

    #[test]
    fn test_documents() {
        let responder = CannedResponder::builtin().unwrap();
        assert_eq!(
            responder.respond("documents for ma amrutam"),
            "Ma Amrutam Yojana – Documents Required:\n- Aadhaar Card\n- Income Certificate\n- Ration Card"
        );
    }

    #[test]
    fn test_unmatched_gets_fallback() {
        let responder = CannedResponder::builtin().unwrap();
        assert_eq!(responder.respond("do i get money for sure"), FALLBACK_RESPONSE);
        assert_eq!(responder.respond("random nonsense"), FALLBACK_RESPONSE);
        assert_eq!(responder.respond("what is pm kisan"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_case_insensitive() {
        let responder = CannedResponder::builtin().unwrap();
        let expected = responder.respond("hello");
        assert_eq!(responder.respond("HELLO"), expected);
        assert_eq!(responder.respond("Hello"), expected);
        assert_eq!(
            responder.respond("Schemes For STUDENTS"),
            responder.respond("schemes for students")
        );
    }

    #[test]
    fn test_deterministic() {
        let responder = CannedResponder::builtin().unwrap();
        for query in ["hello", "how to apply", "??", ""] {
            assert_eq!(responder.respond(query), responder.respond(query));
        }
    }

    #[test]
    fn test_custom_table() {
        let table = ResponseTable::new("no idea")
            .with_response("ping", "pong")
            .unwrap();
        let responder = CannedResponder::new("custom", table);
        assert_eq!(responder.responder_name(), "custom");
        assert_eq!(responder.respond("PING"), "pong");
        assert_eq!(responder.respond("pong"), "no idea");
    }
}
