//! Canned-response responder for the Scheme Sathi chatbot

pub mod builtin;
pub mod canned;
pub mod loader;
pub mod recording;
pub mod table;

pub use builtin::{FALLBACK_RESPONSE, builtin_table};
pub use canned::CannedResponder;
pub use loader::ResponseTableSpec;
pub use recording::{RecordedCall, RecordingResponder};
pub use table::ResponseTable;

pub use sathi_core::{Responder, Result, SathiError};
