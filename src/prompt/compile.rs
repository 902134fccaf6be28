use super::types::{CompiledBlock, ContentSegment, PromptSpec, PromptValue};
use crate::error::PromptError;
use std::collections::HashMap;

/// Input mapping for a single run: variable name to concrete value.
pub type PromptInputs = HashMap<String, PromptValue>;

/// Resolve every segment of `spec` against `inputs`.
///
/// Produces exactly one block per turn, in turn order. Literal segments become
/// `PromptValue::String` parts; variables are cloned out of `inputs`.
pub fn compile_prompt(
    spec: &PromptSpec,
    inputs: &PromptInputs,
) -> Result<Vec<CompiledBlock>, PromptError> {
    spec.turns
        .iter()
        .map(|turn| {
            let parts = turn
                .segments
                .iter()
                .map(|segment| resolve_segment(segment, inputs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CompiledBlock {
                role: turn.role,
                parts,
            })
        })
        .collect()
}

fn resolve_segment(
    segment: &ContentSegment,
    inputs: &PromptInputs,
) -> Result<PromptValue, PromptError> {
    match segment {
        ContentSegment::Literal { text } => Ok(PromptValue::String(text.clone())),
        ContentSegment::Variable { name } => {
            inputs
                .get(name)
                .cloned()
                .ok_or_else(|| PromptError::MissingInput {
                    variable: name.clone(),
                })
        }
    }
}
