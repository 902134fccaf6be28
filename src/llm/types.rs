use crate::prompt::{RequestBody, TurnRole};
use serde::{Deserialize, Serialize};

/// Anthropic messages body as accepted by Bedrock `InvokeModel`.
///
/// The model id travels in the URL, so it is not part of the body.
#[derive(Debug, Clone, Serialize)]
pub struct InvokeBody {
    pub anthropic_version: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Vec<TextBlock>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: Vec<TextBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextBlock {
    pub text: String,
}

impl TextBlock {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl InvokeBody {
    pub fn from_request(anthropic_version: &str, request: &RequestBody) -> Self {
        let messages = request
            .turns
            .iter()
            .map(|turn| WireMessage {
                role: match turn.role {
                    TurnRole::User => "user",
                    TurnRole::Assistant => "assistant",
                },
                content: if turn.text.is_empty() {
                    vec![]
                } else {
                    vec![TextBlock::new(&turn.text)]
                },
            })
            .collect();

        Self {
            anthropic_version: anthropic_version.to_string(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: request
                .system_text
                .as_deref()
                .map(|text| vec![TextBlock::new(text)]),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct InvokeResponse {
    pub(crate) content: Vec<ResponseContentBlock>,
    pub(crate) stop_reason: Option<String>,
    pub(crate) usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Usage {
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ResponseContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

/// Decoded result of one inference call: the text segments in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeOutput {
    pub outputs: Vec<String>,
    pub stop_reason: Option<String>,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

impl InvokeOutput {
    pub fn text_only(outputs: Vec<String>) -> Self {
        Self {
            outputs,
            ..Self::default()
        }
    }

    /// All text segments joined in delivery order.
    pub fn text(&self) -> String {
        self.outputs.concat()
    }
}

impl From<InvokeResponse> for InvokeOutput {
    fn from(response: InvokeResponse) -> Self {
        let outputs = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text),
                ResponseContentBlock::Unsupported => None,
            })
            .collect();

        Self {
            outputs,
            stop_reason: response.stop_reason,
            input_tokens: response.usage.as_ref().map(|u| u.input_tokens),
            output_tokens: response.usage.as_ref().map(|u| u.output_tokens),
        }
    }
}
