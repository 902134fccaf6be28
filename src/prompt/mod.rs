mod compile;
mod request;
pub mod templates;
mod types;

pub use compile::{PromptInputs, compile_prompt};
pub use request::{GenerationParams, build_request, request_from_blocks};
pub use types::{
    ChatRole, ChatTurn, CompiledBlock, ContentSegment, PromptSpec, PromptValue, RequestBody, Turn,
    TurnRole,
};
