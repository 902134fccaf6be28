use super::model_ref::ModelRef;
use super::types::InvokeOutput;
use crate::prompt::RequestBody;
use std::future::Future;
use std::pin::Pin;

/// A remote text-generation endpoint.
///
/// Implementations send one request and return every text segment the
/// endpoint produced, in order. Retries, signing and region routing belong to
/// the implementation, never to callers.
pub trait InferenceClient: Send + Sync {
    /// Client identifier used in logs and errors (e.g. "bedrock").
    fn name(&self) -> &str;

    fn invoke<'a>(
        &'a self,
        model: &'a ModelRef,
        request: &'a RequestBody,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<InvokeOutput>> + Send + 'a>>;
}
