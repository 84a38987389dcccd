//! The completion-service collaborator for signalwatch.
//!
//! The external generative-text API is opaque to the rest of the system: a
//! fallible function from a prompt to a single text completion, with
//! untrusted latency and failure modes. This crate defines that seam
//! ([`completion::CompletionService`]), the prompt construction, and a
//! deterministic offline implementation used by demos and tests.

pub mod canned;
pub mod completion;
pub mod prompt;
