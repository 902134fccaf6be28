use super::compile::{PromptInputs, compile_prompt};
use super::types::{ChatRole, CompiledBlock, PromptSpec, PromptValue, RequestBody, Turn, TurnRole};
use crate::error::PromptError;
use serde::{Deserialize, Serialize};

/// Fixed generation parameters attached to every request a node sends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.0,
        }
    }
}

/// Compile `spec` against `inputs` and reshape the result into a request body.
pub fn build_request(
    spec: &PromptSpec,
    inputs: &PromptInputs,
    params: GenerationParams,
) -> Result<RequestBody, PromptError> {
    let blocks = compile_prompt(spec, inputs)?;
    request_from_blocks(&spec.name, &blocks, params)
}

/// Bucket compiled blocks by role.
///
/// The first SYSTEM block supplies `system_text`; later SYSTEM blocks are
/// ignored. USER and ASSISTANT blocks keep their original order.
pub fn request_from_blocks(
    prompt_name: &str,
    blocks: &[CompiledBlock],
    params: GenerationParams,
) -> Result<RequestBody, PromptError> {
    let mut system_seen = false;
    let mut system_text = None;
    let mut turns = Vec::with_capacity(blocks.len());

    for block in blocks {
        let text = block_text(block)?;
        match block.role {
            ChatRole::System if !system_seen => {
                system_seen = true;
                system_text = Some(text).filter(|t| !t.trim().is_empty());
            }
            ChatRole::System => {
                tracing::debug!(prompt = %prompt_name, "ignoring additional system block");
            }
            ChatRole::User => turns.push(Turn {
                role: TurnRole::User,
                text,
            }),
            ChatRole::Assistant => turns.push(Turn {
                role: TurnRole::Assistant,
                text,
            }),
        }
    }

    Ok(RequestBody {
        system_text,
        turns,
        max_tokens: params.max_tokens,
        temperature: params.temperature,
    })
}

/// Concatenate a block's parts into one text. Whitespace-only strings are
/// skipped and structured values are written as compact JSON.
fn block_text(block: &CompiledBlock) -> Result<String, PromptError> {
    let mut text = String::new();
    for part in &block.parts {
        match part {
            PromptValue::String(value) => {
                if !value.trim().is_empty() {
                    text.push_str(value);
                }
            }
            PromptValue::Json(value) => text.push_str(&value.to_string()),
            other => {
                return Err(PromptError::UnsupportedContent {
                    kind: other.kind().to_string(),
                });
            }
        }
    }
    Ok(text)
}
