use super::http_client::build_http_client_with_timeout;
use super::model_ref::ModelRef;
use super::scrub::api_error;
use super::traits::InferenceClient;
use super::types::{InvokeBody, InvokeOutput, InvokeResponse};
use crate::config::{EndpointConfig, ModelConfig};
use crate::error::LlmError;
use crate::prompt::RequestBody;
use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use url::Url;

pub const DEFAULT_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Bedrock runtime `InvokeModel` client for Anthropic models.
///
/// Authenticates with a Bedrock API key sent as a bearer token.
pub struct BedrockClient {
    api_key: Option<String>,
    base_url: Option<String>,
    anthropic_version: String,
    client: Client,
}

impl BedrockClient {
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_base_url(api_key, None)
    }

    /// `base_url` replaces the regional `bedrock-runtime` host when set.
    pub fn with_base_url(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        Self::build(api_key, base_url, 120)
    }

    pub fn from_config(endpoint: &EndpointConfig, model: &ModelConfig) -> Self {
        Self::build(
            endpoint.api_key.as_deref(),
            endpoint.base_url.as_deref(),
            endpoint.timeout_secs,
        )
        .with_anthropic_version(&model.anthropic_version)
    }

    fn build(api_key: Option<&str>, base_url: Option<&str>, timeout_secs: u64) -> Self {
        Self {
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ToString::to_string),
            base_url: base_url
                .map(|u| u.trim_end_matches('/'))
                .filter(|u| !u.is_empty())
                .map(ToString::to_string),
            anthropic_version: DEFAULT_ANTHROPIC_VERSION.to_string(),
            client: build_http_client_with_timeout(timeout_secs),
        }
    }

    pub fn with_anthropic_version(mut self, version: &str) -> Self {
        self.anthropic_version = version.to_string();
        self
    }

    /// The wire body this client would send for `request`.
    pub fn wire_body(&self, request: &RequestBody) -> InvokeBody {
        InvokeBody::from_request(&self.anthropic_version, request)
    }

    fn invoke_url(&self, model: &ModelRef) -> anyhow::Result<Url> {
        let base = self.base_url.clone().unwrap_or_else(|| {
            format!("https://bedrock-runtime.{}.amazonaws.com", model.region)
        });
        let mut url =
            Url::parse(&base).with_context(|| format!("invalid Bedrock endpoint {base}"))?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("Bedrock endpoint {base} cannot carry a path"))?
            .pop_if_empty()
            .extend(["model", model.model_id.as_str(), "invoke"]);
        Ok(url)
    }

    async fn call_api(
        &self,
        model: &ModelRef,
        request: &RequestBody,
    ) -> anyhow::Result<InvokeResponse> {
        let api_key = self.api_key.as_deref().ok_or_else(|| LlmError::Auth {
            provider: "Bedrock".to_string(),
        })?;
        let url = self.invoke_url(model)?;
        let body = self.wire_body(request);

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error("Bedrock", response).await);
        }

        response
            .json()
            .await
            .context("Bedrock returned an undecodable response body")
    }
}

impl InferenceClient for BedrockClient {
    fn name(&self) -> &str {
        "bedrock"
    }

    fn invoke<'a>(
        &'a self,
        model: &'a ModelRef,
        request: &'a RequestBody,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<InvokeOutput>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.call_api(model, request).await?;
            Ok(InvokeOutput::from(response))
        })
    }
}
