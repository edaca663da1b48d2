//! Prompt Composer — wraps the resume and one user message into a single prompt
//! and turns the model's reply into a `ChatOutcome`.
//!
//! Stateless: one generation call per message, no history, no retries.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::chat::prompts::{RESUME_CHAT_PROMPT, USER_DELIMITER};
use crate::llm_client::{LlmError, TextGenerator};
use crate::resume::ResumeText;

/// Request body for POST /chat. Any string is accepted, including "".
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// The generation call itself failed (transport, API status, bad JSON).
    GenerationFailed,
    /// The call succeeded but carried no text.
    EmptyReply,
}

/// Result of one chat turn. Serialized as `{"response": ..}` or `{"error": .., "code": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatOutcome {
    Answer {
        response: String,
    },
    Failure {
        error: String,
        code: FailureReason,
    },
}

impl From<LlmError> for ChatOutcome {
    fn from(e: LlmError) -> Self {
        let code = match e {
            LlmError::EmptyContent => FailureReason::EmptyReply,
            _ => FailureReason::GenerationFailed,
        };
        ChatOutcome::Failure {
            error: e.to_string(),
            code,
        }
    }
}

/// Builds the prompt: preamble with the resume embedded verbatim, then the
/// delimiter, then the raw user message.
pub fn compose_prompt(resume: &ResumeText, message: &str) -> String {
    let mut prompt = RESUME_CHAT_PROMPT.replace("{resume_text}", resume.as_str());
    prompt.push_str(USER_DELIMITER);
    prompt.push_str(message);
    prompt
}

/// Answers one message about the resume. Never returns an error; generation
/// failures come back as `ChatOutcome::Failure`.
pub async fn answer(
    generator: &dyn TextGenerator,
    resume: &ResumeText,
    message: &str,
) -> ChatOutcome {
    let prompt = compose_prompt(resume, message);

    match generator.generate(&prompt).await {
        Ok(text) => {
            info!("Chat answered ({} chars)", text.len());
            ChatOutcome::Answer {
                response: text.trim().to_string(),
            }
        }
        Err(e) => {
            error!("Chat generation failed: {e}");
            e.into()
        }
    }
}
