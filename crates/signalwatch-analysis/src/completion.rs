use std::future::Future;

use serde::{Deserialize, Serialize};

/// What the completion service accepts: a model identifier and the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

/// What the completion service returns on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
}

/// Any failure from the completion call. The kind is deliberately
/// unclassified: the simulator treats a malformed response and a network
/// failure identically, so there is nothing to distinguish here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionError {
    #[error("completion service failure: {0}")]
    ServiceCall(String),
}

/// The seam between the simulator and the external generative-text API.
///
/// Implementations may take unbounded time and fail arbitrarily; callers
/// own all failure policy. The returned future is `Send` so firings can run
/// on spawned tasks.
pub trait CompletionService: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<Completion, CompletionError>> + Send;
}
