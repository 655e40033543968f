//! Core types and traits for the Scheme Sathi chatbot

pub mod error;
pub mod responder;

pub use error::{Result, SathiError};
pub use responder::Responder;
