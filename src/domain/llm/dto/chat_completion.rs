//! Wire types for an OpenAI-compatible chat-completion call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Only the fields this service reads; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, or a description of what is missing.
    pub fn first_content(&self) -> Result<&str, String> {
        let choices = self
            .choices
            .as_ref()
            .ok_or_else(|| "response has no `choices` array".to_string())?;
        let first = choices
            .first()
            .ok_or_else(|| "`choices` array is empty".to_string())?;
        let message = first
            .message
            .as_ref()
            .ok_or_else(|| "`choices[0]` has no `message`".to_string())?;
        message
            .content
            .as_deref()
            .ok_or_else(|| "`choices[0].message` has no `content`".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn first_content_reads_first_choice() {
        let resp = parse(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"a\":1}"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }));
        assert_eq!(resp.first_content().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn missing_pieces_are_described() {
        assert!(parse(json!({})).first_content().unwrap_err().contains("no `choices`"));
        assert!(parse(json!({"choices": []})).first_content().unwrap_err().contains("empty"));
        assert!(parse(json!({"choices": [{}]}))
            .first_content()
            .unwrap_err()
            .contains("no `message`"));
        assert!(parse(json!({"choices": [{"message": {"content": null}}]}))
            .first_content()
            .unwrap_err()
            .contains("no `content`"));
    }

    #[test]
    fn request_serializes_in_chat_completion_shape() {
        let req = ChatCompletionRequest {
            model: "gpt-4o".into(),
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
            max_tokens: 1000,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 1000
            })
        );
    }
}
