//! Image analysis through an external chat-completion model.
//!
//! Builds the prompt from the configured template, sends it together with the
//! image reference, then unwraps the model's reply into a JSON object. Each
//! failure stage maps to its own [`AppError`] variant so callers can tell a
//! network problem from a malformed reply.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::LlmConfig;
use crate::domain::llm::dto::chat_completion::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
};
use crate::domain::llm::dto::image_processing_request::ImageProcessingRequest;
use crate::errors::AppError;

use super::fence::strip_code_fence;
use super::prompt_template::render;

pub struct ImageProcessingService {
    client: Client,
    config: LlmConfig,
}

impl ImageProcessingService {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    pub async fn process_image(&self, req: ImageProcessingRequest) -> Result<Value, AppError> {
        let request_id = Uuid::new_v4();
        let payload = self.build_payload(&req)?;

        info!(
            %request_id,
            kind = %req.kind,
            emotion = %req.emotion,
            model = %self.config.model,
            "Sending image-processing request"
        );

        let body = self.post_with_retry(&payload).await.map_err(|e| {
            warn!(%request_id, error = %e, "Chat-completion call failed");
            AppError::Transport(format!("{:#}", e))
        })?;

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::StructuralResponse(format!("unexpected response body: {}", e)))?;
        let content = parsed
            .first_content()
            .map_err(AppError::StructuralResponse)?;

        let result = serde_json::from_str::<Value>(strip_code_fence(content)).map_err(|e| {
            debug!(%request_id, content, "Model reply is not JSON");
            AppError::Parse(e.to_string())
        })?;

        info!(%request_id, "Image-processing request completed");
        Ok(result)
    }

    fn build_payload(&self, req: &ImageProcessingRequest) -> Result<ChatCompletionRequest, AppError> {
        let prompt = render(
            &self.config.prompt_template,
            &[
                ("type_", req.kind.as_str()),
                ("emotion", req.emotion.as_str()),
                ("voice_text", req.voice_text.as_str()),
            ],
        )
        .map_err(|e| AppError::PromptTemplate(e.to_string()))?;

        Ok(ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(self.config.purpose.clone()),
                ChatMessage::system(format!("image_url: {}, detail: high", req.image_url)),
                ChatMessage::user(prompt),
            ],
            max_tokens: self.config.max_tokens,
        })
    }

    /// POST the payload, retrying transport failures up to `max_retries` extra times.
    async fn post_with_retry(&self, payload: &ChatCompletionRequest) -> Result<String> {
        let attempts = self.config.max_retries.saturating_add(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            match self.post_once(payload).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    if attempt < attempts {
                        debug!(attempt, error = %e, "Retrying chat-completion call");
                    }
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow!("no attempt was made")))
    }

    async fn post_once(&self, payload: &ChatCompletionRequest) -> Result<String> {
        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        resp.text().await.context("Failed to read response body")
    }
}
