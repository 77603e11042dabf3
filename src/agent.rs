//! Placeholder prediction logic
//!
//! Stand-in until a real model is wired in: answers echo the question
//! behind a fixed prefix.

/// Prefix prepended to every echoed question
pub const ANSWER_PREFIX: &str = "You asked: ";

/// Produce the answer for a question
pub fn answer(question: &str) -> String {
    format!("{}{}", ANSWER_PREFIX, question)
}
