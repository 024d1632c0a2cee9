//! HTTP client for the text-generation inference endpoint

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use super::prompts::{self, Tone};

/// Outcome of a failed generation attempt.
///
/// `Display` carries the exact text shown to the user; the underlying
/// transport cause is logged, not surfaced.
#[derive(Debug, Error)]
pub enum GenError {
    /// Error text reported by the service, passed through verbatim
    #[error("{0}")]
    Service(String),
    /// Response parsed but carried no usable reply
    #[error("No reply generated. Please try again.")]
    NoReply,
    /// Network failure or a body that was not JSON
    #[error("Error generating reply. Please check your API token and network.")]
    Transport,
    /// No credential available before the request was attempted
    #[error("No API token configured. Set REDRAFT_API_TOKEN or run 'redraft setup'.")]
    MissingToken,
}

/// Client for a Hugging Face style text-generation endpoint
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl HfClient {
    pub fn new(api_token: String, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_token,
        }
    }

    /// Send one generation request and normalize the response.
    ///
    /// The service reports its own errors inside the body; the HTTP status
    /// line is not consulted. No timeout and no retry.
    pub async fn generate_reply(&self, email: &str, tone: Tone) -> Result<String, GenError> {
        let prompt = prompts::reply_prompt(email, tone);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("generation request failed: {}", e);
                GenError::Transport
            })?;

        let value: Value = response.json().await.map_err(|e| {
            tracing::warn!("generation response was not JSON: {}", e);
            GenError::Transport
        })?;

        tracing::debug!("generation response: {}", value);
        normalize_response(&value)
    }
}

/// Normalize the loosely-typed response body into a reply or an error.
///
/// Shapes are checked in fixed priority order: a service-reported `error`
/// field wins, then a bare string body, then an array whose first element
/// carries `generated_text`. Anything else is treated as no reply.
pub(crate) fn normalize_response(value: &Value) -> Result<String, GenError> {
    if let Some(err) = value.get("error") {
        let text = match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(GenError::Service(text));
    }

    if let Some(s) = value.as_str() {
        return Ok(s.trim().to_string());
    }

    if let Some(first) = value.as_array().and_then(|a| a.first())
        && let Some(text) = first.get("generated_text").and_then(Value::as_str)
    {
        return Ok(text.trim().to_string());
    }

    Err(GenError::NoReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_error_passed_through_verbatim() {
        let result = normalize_response(&json!({ "error": "Model is overloaded" }));
        match result {
            Err(GenError::Service(msg)) => assert_eq!(msg, "Model is overloaded"),
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_string_is_reply() {
        let result = normalize_response(&json!("hello"));
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn test_generated_text_array_is_trimmed_reply() {
        let result = normalize_response(&json!([{ "generated_text": " hi " }]));
        assert_eq!(result.unwrap(), "hi");
    }

    #[test]
    fn test_empty_object_is_no_reply() {
        let result = normalize_response(&json!({}));
        assert!(matches!(result, Err(GenError::NoReply)));
    }

    #[test]
    fn test_error_field_wins_over_other_shapes() {
        // An array body would normally yield a reply, but an error object is
        // checked first.
        let result = normalize_response(&json!({ "error": "quota exceeded", "generated_text": "x" }));
        assert!(matches!(result, Err(GenError::Service(_))));
    }

    #[test]
    fn test_non_string_error_field_is_stringified() {
        let result = normalize_response(&json!({ "error": { "code": 503 } }));
        match result {
            Err(GenError::Service(msg)) => assert!(msg.contains("503")),
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_array_without_generated_text_is_no_reply() {
        let result = normalize_response(&json!([{ "score": 0.9 }]));
        assert!(matches!(result, Err(GenError::NoReply)));
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            GenError::NoReply.to_string(),
            "No reply generated. Please try again."
        );
        assert_eq!(
            GenError::Transport.to_string(),
            "Error generating reply. Please check your API token and network."
        );
        assert!(GenError::MissingToken.to_string().contains("REDRAFT_API_TOKEN"));
    }
}
