// Prompt construction for blog post generation.
// The system instruction lives in llm_client::prompts; this file builds the per-request part.

use crate::generation::tone::ToneLabel;

/// Builds the instruction sent to the model for a single post.
/// Inputs are assumed to be validated already (see `GenerationRequest::new`).
pub fn build_blog_prompt(topic: &str, tone: ToneLabel, length: u32) -> String {
    format!(
        "Write a {} blog post about {topic} with a maximum length of {length} words. \
         Ensure a proper structure including an introduction, main sections and conclusion",
        tone.as_str().to_lowercase()
    )
}
