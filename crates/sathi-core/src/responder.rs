//! Responder trait

/// Something that answers a user query with text.
///
/// Implementations are total: every input produces a response, falling back to a
/// default answer instead of failing.
pub trait Responder: Send + Sync {
    fn respond(&self, query: &str) -> String;

    fn responder_name(&self) -> &str;
}

impl<R: Responder + ?Sized> Responder for std::sync::Arc<R> {
    fn respond(&self, query: &str) -> String {
        (**self).respond(query)
    }

    fn responder_name(&self) -> &str {
        (**self).responder_name()
    }
}

impl<R: Responder + ?Sized> Responder for Box<R> {
    fn respond(&self, query: &str) -> String {
        (**self).respond(query)
    }

    fn responder_name(&self) -> &str {
        (**self).responder_name()
    }
}
