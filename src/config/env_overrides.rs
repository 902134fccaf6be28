use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        // An empty variable counts as unset so the Bedrock token can still apply.
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        if let Some(key) =
            non_empty("TONEFLOW_API_KEY").or_else(|| non_empty("AWS_BEARER_TOKEN_BEDROCK"))
        {
            self.endpoint.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("TONEFLOW_MODEL")
            && !model.is_empty()
        {
            self.model.ml_model = model;
        }

        if let Ok(base_url) = std::env::var("TONEFLOW_BASE_URL")
            && !base_url.is_empty()
        {
            self.endpoint.base_url = Some(base_url);
        }

        if let Ok(temp_str) = std::env::var("TONEFLOW_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=1.0).contains(&temp)
        {
            self.model.temperature = temp;
        }

        if let Ok(max_str) = std::env::var("TONEFLOW_MAX_TOKENS")
            && let Ok(max_tokens) = max_str.parse::<u32>()
            && max_tokens > 0
        {
            self.model.max_tokens = max_tokens;
        }
    }
}
