use super::aggregate::BranchOutputs;
use super::node::PromptNode;
use super::router::{Tone, route};
use crate::config::Config;
use crate::error::Result;
use crate::llm::{InferenceClient, ModelRef};
use crate::prompt::templates::{self, MESSAGE_VARIABLE};
use crate::prompt::{GenerationParams, PromptInputs, PromptValue};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Externally observable artifacts of one workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowRun {
    /// Raw classifier text, exactly as returned.
    pub classification: String,
    /// Branch the router selected, if any.
    pub tone: Option<Tone>,
    /// Final `response` output; absent when no branch fired.
    pub response: Option<String>,
}

/// Classify a message's tone, then answer with the matching response prompt.
pub struct ToneWorkflow {
    client: Arc<dyn InferenceClient>,
    classifier: PromptNode,
    be_happy: PromptNode,
    cheer_up: PromptNode,
    settle_down: PromptNode,
}

impl ToneWorkflow {
    pub fn new(client: Arc<dyn InferenceClient>, model: ModelRef, params: GenerationParams) -> Self {
        let node = |spec| PromptNode::new(spec, model.clone(), params);
        Self {
            classifier: node(templates::detect_tone()),
            be_happy: node(templates::be_happy()),
            cheer_up: node(templates::cheer_up()),
            settle_down: node(templates::settle_down()),
            client,
        }
    }

    pub fn from_config(config: &Config, client: Arc<dyn InferenceClient>) -> Result<Self> {
        Ok(Self::new(
            client,
            config.model.model_ref()?,
            config.model.generation_params(),
        ))
    }

    pub fn classifier(&self) -> &PromptNode {
        &self.classifier
    }

    /// Response generator wired to `tone`'s branch.
    pub fn responder(&self, tone: Tone) -> &PromptNode {
        match tone {
            Tone::Happy => &self.be_happy,
            Tone::Sad => &self.cheer_up,
            Tone::Angry => &self.settle_down,
        }
    }

    /// Every node, classifier first.
    pub fn nodes(&self) -> [&PromptNode; 4] {
        [
            &self.classifier,
            &self.be_happy,
            &self.cheer_up,
            &self.settle_down,
        ]
    }

    pub fn node(&self, name: &str) -> Option<&PromptNode> {
        self.nodes().into_iter().find(|node| node.name() == name)
    }

    /// Run classify, route, generate and aggregate for one message.
    ///
    /// A classifier answer that matches no tone is not an error: the run
    /// completes with `tone` and `response` both absent.
    pub async fn run(&self, message: &str) -> Result<WorkflowRun> {
        let inputs = message_inputs(message);
        let client = self.client.as_ref();

        let classification = self.classifier.run(client, &inputs).await?.text();
        let tone = route(&classification);

        let mut outputs = BranchOutputs::default();
        if let Some(tone) = tone {
            info!(%tone, "router.selected");
            let text = self.responder(tone).run(client, &inputs).await?.text();
            outputs.set(tone, text);
        } else {
            info!(classification = %classification, "router.no_match");
        }

        Ok(WorkflowRun {
            classification,
            tone,
            response: outputs.response(),
        })
    }
}

/// Input mapping holding the workflow's single `message` input.
pub fn message_inputs(message: &str) -> PromptInputs {
    PromptInputs::from([(MESSAGE_VARIABLE.to_string(), PromptValue::from(message))])
}
