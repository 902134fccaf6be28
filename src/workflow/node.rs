use crate::error::{LlmError, PromptError, Result};
use crate::llm::{InferenceClient, ModelRef};
use crate::prompt::{GenerationParams, PromptInputs, PromptSpec, RequestBody, build_request};
use tracing::{info, warn};
use uuid::Uuid;

/// Lifecycle signals of one prompt execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Initiated {
        execution_id: Uuid,
    },
    Fulfilled {
        execution_id: Uuid,
        outputs: Vec<String>,
    },
}

/// Result of a fulfilled prompt execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRun {
    pub execution_id: Uuid,
    pub outputs: Vec<String>,
}

impl PromptRun {
    /// Output segments joined in delivery order.
    pub fn text(&self) -> String {
        self.outputs.concat()
    }
}

/// A prompt bound to a model and fixed generation parameters.
#[derive(Debug, Clone)]
pub struct PromptNode {
    spec: PromptSpec,
    model: ModelRef,
    params: GenerationParams,
}

impl PromptNode {
    pub fn new(spec: PromptSpec, model: ModelRef, params: GenerationParams) -> Self {
        Self {
            spec,
            model,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn build_request(
        &self,
        inputs: &PromptInputs,
    ) -> std::result::Result<RequestBody, PromptError> {
        build_request(&self.spec, inputs, self.params)
    }

    pub async fn run(
        &self,
        client: &dyn InferenceClient,
        inputs: &PromptInputs,
    ) -> Result<PromptRun> {
        self.run_with_events(client, inputs, |_| {}).await
    }

    /// Execute the prompt, reporting `Initiated` before the request is built
    /// and a single `Fulfilled` once every output is available.
    pub async fn run_with_events<F>(
        &self,
        client: &dyn InferenceClient,
        inputs: &PromptInputs,
        mut on_event: F,
    ) -> Result<PromptRun>
    where
        F: FnMut(PromptEvent) + Send,
    {
        let execution_id = Uuid::new_v4();
        info!(node = %self.name(), %execution_id, "prompt.initiated");
        on_event(PromptEvent::Initiated { execution_id });

        let request = self.build_request(inputs).inspect_err(|e| {
            warn!(node = %self.name(), %execution_id, error = %e, "prompt.rejected");
        })?;

        let output = client
            .invoke(&self.model, &request)
            .await
            .map_err(|e| {
                warn!(
                    node = %self.name(),
                    %execution_id,
                    client = %client.name(),
                    error = %e,
                    "prompt.failed"
                );
                // Missing credentials stay typed; everything else is a failed call.
                match e.downcast::<LlmError>() {
                    Ok(auth @ LlmError::Auth { .. }) => auth,
                    Ok(other) => LlmError::Invocation {
                        node: self.name().to_string(),
                        message: other.to_string(),
                    },
                    Err(e) => LlmError::Invocation {
                        node: self.name().to_string(),
                        message: format!("{e:#}"),
                    },
                }
            })?;

        info!(
            node = %self.name(),
            %execution_id,
            outputs = output.outputs.len(),
            stop_reason = ?output.stop_reason,
            input_tokens = ?output.input_tokens,
            output_tokens = ?output.output_tokens,
            "prompt.fulfilled"
        );
        on_event(PromptEvent::Fulfilled {
            execution_id,
            outputs: output.outputs.clone(),
        });

        Ok(PromptRun {
            execution_id,
            outputs: output.outputs,
        })
    }
}
