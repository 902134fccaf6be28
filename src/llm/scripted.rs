//! In-memory `InferenceClient` for tests and offline runs.

use super::model_ref::ModelRef;
use super::traits::InferenceClient;
use super::types::InvokeOutput;
use crate::prompt::RequestBody;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

type Responder = dyn Fn(&RequestBody) -> anyhow::Result<Vec<String>> + Send + Sync;

/// Answers every request with the output of a responder closure and records
/// the requests it saw.
#[derive(Clone)]
pub struct ScriptedClient {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<RequestBody>>>,
}

impl ScriptedClient {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RequestBody) -> anyhow::Result<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with the same text segments.
    pub fn fixed(outputs: &[&str]) -> Self {
        let outputs: Vec<String> = outputs.iter().map(ToString::to_string).collect();
        Self::new(move |_| Ok(outputs.clone()))
    }

    /// Pick the answer by the request's system text: the first rule whose
    /// needle occurs in the system text wins.
    pub fn by_system_text(rules: &[(&str, &str)]) -> Self {
        let rules: Vec<(String, String)> = rules
            .iter()
            .map(|(needle, answer)| ((*needle).to_string(), (*answer).to_string()))
            .collect();
        Self::new(move |request| {
            let system = request.system_text.as_deref().unwrap_or_default();
            rules
                .iter()
                .find(|(needle, _)| system.contains(needle.as_str()))
                .map(|(_, answer)| vec![answer.clone()])
                .ok_or_else(|| anyhow::anyhow!("no scripted answer for system text {system:?}"))
        })
    }

    pub fn calls(&self) -> Vec<RequestBody> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl InferenceClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    fn invoke<'a>(
        &'a self,
        _model: &'a ModelRef,
        request: &'a RequestBody,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<InvokeOutput>> + Send + 'a>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request.clone());
            let outputs = (self.responder)(request)?;
            Ok(InvokeOutput::text_only(outputs))
        })
    }
}
