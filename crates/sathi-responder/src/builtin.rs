//! Built-in Scheme Sathi answers

use sathi_core::Result;

use crate::table::ResponseTable;

pub const FALLBACK_RESPONSE: &str = "I can help you with scheme search, eligibility, required documents, benefits, or application steps. Please choose one.";

const BUILTIN_RESPONSES: &[(&str, &str)] = &[
    (
        "hello",
        "Hi 👋 I’m Scheme Sathi Assistant. I can help you find schemes, check eligibility, required documents, and application steps.",
    ),
    (
        "schemes for students",
        "Student Schemes:\n- Post Matric Scholarship\n- National Scholarship Portal schemes",
    ),
    (
        "am i eligible for ma amrutam",
        "You may be eligible for Ma Amrutam Yojana if your family income and category meet the official criteria.",
    ),
    (
        "documents for ma amrutam",
        "Ma Amrutam Yojana – Documents Required:\n- Aadhaar Card\n- Income Certificate\n- Ration Card",
    ),
    (
        "how to apply",
        "Please specify the scheme you want to apply for.",
    ),
    ("random nonsense", FALLBACK_RESPONSE),
];

/// The answer table shipped with the assistant.
pub fn builtin_table() -> Result<ResponseTable> {
    let mut table = ResponseTable::new(FALLBACK_RESPONSE);
    for (key, response) in BUILTIN_RESPONSES {
        table.insert(key, *response)?;
    }
    Ok(table)
}
