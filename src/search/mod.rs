//! Search orchestration module
//!
//! Resolves the command-line request, runs it against a provider and
//! wraps the outcome in a response envelope.

mod executor;
mod request;

pub use executor::execute;
pub use request::SearchRequest;
