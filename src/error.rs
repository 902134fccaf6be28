use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `toneflow`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide how to report a failed run; the HTTP client, config loader
/// and binary keep using `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum FlowError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Prompt compilation / request building ───────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── LLM / inference endpoint ────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid model reference {model:?}: {reason}")]
    ModelRef { model: String, reason: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Prompt errors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A template references a variable the run did not supply.
    #[error("missing input variable {variable:?}")]
    MissingInput { variable: String },

    /// A compiled part has a content kind that cannot be sent as text.
    #[error("unsupported content kind: {kind}")]
    UnsupportedContent { kind: String },
}

// ─── LLM / inference errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("node {node} invocation failed: {message}")]
    Invocation { node: String, message: String },

    #[error("{provider} credentials not set")]
    Auth { provider: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, FlowError>;
