use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::generator::TextGenerator;
use crate::config::ApiKey;
use crate::error::{ConfigError, GenerateError};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Google Gemini client speaking the OpenAI-compatible chat completions API.
///
/// Holds only immutable state: the credential, the model and the endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, model: String, endpoint: String) -> Result<Self, ConfigError> {
        let client = Client::builder().build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = self.completions_url();

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, GenerateError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .find_map(|c| c.message.content)
        .ok_or_else(|| GenerateError::MalformedResponse("no text in response".to_string()))
}
