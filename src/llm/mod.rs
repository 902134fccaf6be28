// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod model_ref;
pub mod scrub;
pub mod traits;
pub mod types;

// ── Client implementations ──────────────────────────────────────────────────
pub mod bedrock;
pub mod scripted;

pub use http_client::build_http_client_with_timeout;
pub use model_ref::ModelRef;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::InferenceClient;
pub use types::{InvokeBody, InvokeOutput, TextBlock, WireMessage};

pub use bedrock::{BedrockClient, DEFAULT_ANTHROPIC_VERSION};
pub use scripted::ScriptedClient;
