use parking_lot::RwLock;
use sathi_core::Responder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub query: String,
    pub response: String,
}

/// Wraps a responder and keeps every query/response pair in call order.
pub struct RecordingResponder<R> {
    inner: R,
    history: RwLock<Vec<RecordedCall>>,
}

impl<R: Responder> RecordingResponder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            history: RwLock::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.history.read().len()
    }

    pub fn call_history(&self) -> Vec<RecordedCall> {
        self.history.read().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.history.read().last().cloned()
    }

    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Responder> Responder for RecordingResponder<R> {
    fn respond(&self, query: &str) -> String {
        let response = self.inner.respond(query);
        self.history.write().push(RecordedCall {
            query: query.to_string(),
            response: response.clone(),
        });
        response
    }

    fn responder_name(&self) -> &str {
        self.inner.responder_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canned::CannedResponder;

    #[test]
    fn test_records_in_order() {
        let recorder = RecordingResponder::new(CannedResponder::builtin().unwrap());
        assert_eq!(recorder.call_count(), 0);

        recorder.respond("hello");
        recorder.respond("HOW TO APPLY");
        assert_eq!(recorder.call_count(), 2);

        let history = recorder.call_history();
        assert_eq!(history[0].query, "hello");
        assert_eq!(history[1].query, "HOW TO APPLY");
        assert_eq!(
            history[1].response,
            "Please specify the scheme you want to apply for."
        );
    }

    #[test]
    fn test_passes_response_through() {
        let recorder = RecordingResponder::new(CannedResponder::builtin().unwrap());
        let direct = CannedResponder::builtin().unwrap().respond("schemes for students");
        assert_eq!(recorder.respond("schemes for students"), direct);
        assert_eq!(recorder.last_call().unwrap().response, direct);
        assert_eq!(recorder.responder_name(), "scheme-sathi");
    }

    #[test]
    fn test_history_shared_through_arc() {
        let recorder = std::sync::Arc::new(RecordingResponder::new(
            CannedResponder::builtin().unwrap(),
        ));
        let handle: std::sync::Arc<dyn Responder> = recorder.clone();

        handle.respond("hello");
        assert_eq!(recorder.call_count(), 1);
        assert_eq!(recorder.last_call().unwrap().query, "hello");
    }

    #[test]
    fn test_clear_history() {
        let recorder = RecordingResponder::new(CannedResponder::builtin().unwrap());
        recorder.respond("hello");
        recorder.clear_history();
        assert_eq!(recorder.call_count(), 0);
        assert!(recorder.last_call().is_none());
    }
}
