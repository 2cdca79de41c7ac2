//! Blog post generation — validates the request, builds the prompt, calls the model.
//!
//! Flow: GenerationRequest::new → build_blog_prompt → TextGenerator::generate → raw text.
//! The returned text is passed through untouched.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_blog_prompt;
use crate::generation::tone::ToneLabel;
use crate::llm_client::prompts::BLOG_SYSTEM_INSTRUCTION;
use crate::llm_client::TextGenerator;

pub const MIN_LENGTH: u32 = 100;
pub const MAX_LENGTH: u32 = 5000;
pub const LENGTH_STEP: u32 = 100;
pub const DEFAULT_LENGTH: u32 = 1000;

/// A validated request for one blog post. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    tone: ToneLabel,
    length: u32,
}

impl GenerationRequest {
    /// Trims the topic and checks it is non-empty and that `length` is within
    /// `[MIN_LENGTH, MAX_LENGTH]`.
    pub fn new(topic: &str, tone: ToneLabel, length: u32) -> Result<Self, AppError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(AppError::Validation(format!(
                "length must be between {MIN_LENGTH} and {MAX_LENGTH} words, got {length}"
            )));
        }

        Ok(Self {
            topic: topic.to_string(),
            tone,
            length,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> ToneLabel {
        self.tone
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn prompt(&self) -> String {
        build_blog_prompt(&self.topic, self.tone, self.length)
    }

    /// Progress line shown while the post is being written.
    pub fn status_message(&self) -> String {
        format!(
            "Generating a **{}** blog post about **{}** with a length of **{}** words...",
            self.tone.as_str().to_lowercase(),
            self.topic,
            self.length
        )
    }
}

/// Sends one request to the model and returns the generated post text.
pub async fn generate_blog_post(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    info!(
        "Generating {} post ({} words) about {:?}",
        request.tone, request.length, request.topic
    );

    let text = llm
        .generate(&request.prompt(), BLOG_SYSTEM_INSTRUCTION)
        .await
        .map_err(|e| AppError::Llm(format!("blog generation failed: {e}")))?;

    info!("Generated post: {} chars", text.len());
    Ok(text)
}
