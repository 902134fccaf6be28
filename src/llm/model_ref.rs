use crate::error::ConfigError;
use std::str::FromStr;

const BEDROCK_PREFIX: &str = "aws-bedrock//";

/// A Bedrock model addressed by a vendor-qualified string such as
/// `aws-bedrock//anthropic/claude-3-5-sonnet-20240620-v1:0/us-west-2`.
///
/// The last path segment is the region; the segments before it, joined with
/// `.`, form the Bedrock model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub model_id: String,
    pub region: String,
}

impl FromStr for ModelRef {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::ModelRef {
            model: value.to_string(),
            reason: reason.to_string(),
        };

        let path = value
            .strip_prefix(BEDROCK_PREFIX)
            .ok_or_else(|| invalid("expected an aws-bedrock// model"))?;
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("empty path segment"));
        }

        let Some((region, model_parts)) = segments.split_last() else {
            return Err(invalid("missing region"));
        };
        if model_parts.is_empty() {
            return Err(invalid("missing model id"));
        }

        Ok(Self {
            model_id: model_parts.join("."),
            region: (*region).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_claude_on_bedrock() {
        let model: ModelRef = "aws-bedrock//anthropic/claude-3-5-sonnet-20240620-v1:0/us-west-2"
            .parse()
            .unwrap();

        assert_eq!(model.model_id, "anthropic.claude-3-5-sonnet-20240620-v1:0");
        assert_eq!(model.region, "us-west-2");
    }

    #[test]
    fn rejects_other_providers() {
        let err = "openai//gpt-4o/us-east-1".parse::<ModelRef>().unwrap_err();
        assert!(err.to_string().contains("aws-bedrock"));
    }

    #[test]
    fn rejects_region_only() {
        let err = "aws-bedrock//us-west-2".parse::<ModelRef>().unwrap_err();
        assert!(err.to_string().contains("missing model id"));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!("aws-bedrock//anthropic//us-west-2".parse::<ModelRef>().is_err());
        assert!("aws-bedrock//".parse::<ModelRef>().is_err());
    }
}
