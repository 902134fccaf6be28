use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One piece of a chat turn, either fixed text or a named input slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSegment {
    Literal { text: String },
    Variable { name: String },
}

impl ContentSegment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub segments: Vec<ContentSegment>,
}

impl ChatTurn {
    pub fn new(role: ChatRole, segments: Vec<ContentSegment>) -> Self {
        Self { role, segments }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(ChatRole::System, vec![ContentSegment::literal(text)])
    }

    pub fn user_variable(name: impl Into<String>) -> Self {
        Self::new(ChatRole::User, vec![ContentSegment::variable(name)])
    }
}

/// Static multi-turn chat template. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub name: String,
    pub turns: Vec<ChatTurn>,
}

impl PromptSpec {
    pub fn new(name: impl Into<String>, turns: Vec<ChatTurn>) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }
}

/// A concrete input value supplied for a template variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptValue {
    String(String),
    Json(serde_json::Value),
    Number(f64),
    Image { url: String },
}

impl PromptValue {
    /// Upper-case content kind tag, as reported in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "STRING",
            Self::Json(_) => "JSON",
            Self::Number(_) => "NUMBER",
            Self::Image { .. } => "IMAGE",
        }
    }
}

impl From<&str> for PromptValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PromptValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<serde_json::Value> for PromptValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// A `ChatTurn` with every variable replaced by its input value.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledBlock {
    pub role: ChatRole,
    pub parts: Vec<PromptValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TurnRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

/// Provider-neutral request produced from a compiled prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub system_text: Option<String>,
    pub turns: Vec<Turn>,
    pub max_tokens: u32,
    pub temperature: f64,
}
