use serde_json::{json, Value};
use thiserror::Error;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API error: {0}")]
    Api(String),

    #[error("malformed generation response: {0}")]
    Response(String),

    #[error("response did not match the declared schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// One structured-output call: a prompt, an optional system instruction,
/// and the JSON schema the response text must conform to.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub response_schema: Value,
}

/// Narrow seam in front of the generation provider. Everything above this
/// trait only sees prompt-in, JSON-text-out.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        GeminiClient {
            http_client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn request_body(request: &GenerationRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema
            }
        });

        if let Some(system) = &request.system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        body
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model, self.api_key
        );
        let body = Self::request_body(&request);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(GenerationError::Api(format!("{}: {}", status, error_text)));
        }

        let response_json: Value = response.json().await?;

        let text = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                GenerationError::Response("no candidate text in response".to_string())
            })?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_prompt_schema_and_json_mime() {
        let request = GenerationRequest {
            prompt: "describe the profile".to_string(),
            system_instruction: None,
            response_schema: json!({ "type": "ARRAY" }),
        };
        let body = GeminiClient::request_body(&request);

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "describe the profile");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn system_instruction_is_attached_when_present() {
        let request = GenerationRequest {
            prompt: "p".to_string(),
            system_instruction: Some("follow the rules".to_string()),
            response_schema: json!({ "type": "OBJECT" }),
        };
        let body = GeminiClient::request_body(&request);
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "follow the rules");
    }
}
