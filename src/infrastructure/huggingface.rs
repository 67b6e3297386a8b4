// src/infrastructure/huggingface.rs
use crate::application::TextGenerator;
use crate::constants::{
    MAX_NEW_TOKENS, MODEL_ID, REPETITION_PENALTY, TEMPERATURE, TOP_P,
};
use crate::domain::DomainError;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

lazy_static! {
    static ref CONTROL_TOKEN_REGEX: Regex =
        Regex::new(r"</?s>|\[/?INST\]").expect("Failed to compile control token regex");
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize, PartialEq)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
    return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            repetition_penalty: REPETITION_PENALTY,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Text generation through the Hugging Face inference API.
pub struct HuggingFaceClient {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Client for an endpoint base URL such as the configured inference host.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.endpoint, MODEL_ID)
    }
}

/// Trim the completion and drop instruction-format tokens the model echoes back.
pub fn clean_completion(text: &str) -> String {
    CONTROL_TOKEN_REGEX.replace_all(text, "").trim().to_string()
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    #[instrument(level = "debug", skip_all, fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters::default(),
        };

        let response = self
            .client
            .post(self.model_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, %message, "Inference request rejected");
            return Err(DomainError::Api { status, message });
        }

        let body: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("Malformed response: {e}")))?;
        let first = body
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Generation("Response contained no generations".to_string()))?;

        let text = clean_completion(&first.generated_text);
        debug!(len = text.len(), "Received completion");
        Ok(text)
    }
}
