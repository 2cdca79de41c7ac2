//! Axum route handlers for the tone catalog and blog generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::generation::generator::{
    generate_blog_post, GenerationRequest, DEFAULT_LENGTH, LENGTH_STEP, MAX_LENGTH, MIN_LENGTH,
};
use crate::generation::tone::{
    suggest_tone, tone_catalog, ToneEntry, ToneLabel, ALL_TONES, FORM_DEFAULT_TONE,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LengthBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Debug, Serialize)]
pub struct ToneCatalogResponse {
    pub tones: Vec<ToneEntry>,
    /// Tone preselected before a topic is entered.
    pub default_tone: ToneLabel,
    pub length: LengthBounds,
}

#[derive(Debug, Deserialize)]
pub struct SuggestToneRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestToneResponse {
    pub topic: String,
    pub suggested_tone: ToneLabel,
    pub description: &'static str,
    /// Absent until the user has typed a topic.
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePostRequest {
    pub topic: String,
    /// Falls back to the suggested tone when omitted.
    pub tone: Option<String>,
    pub length: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePostResponse {
    pub topic: String,
    pub tone: ToneLabel,
    pub suggested_tone: ToneLabel,
    pub length: u32,
    pub status_message: String,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tones
///
/// Everything the form needs to render its controls.
pub async fn handle_list_tones() -> Json<ToneCatalogResponse> {
    Json(ToneCatalogResponse {
        tones: tone_catalog(),
        default_tone: FORM_DEFAULT_TONE,
        length: LengthBounds {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
            step: LENGTH_STEP,
            default: DEFAULT_LENGTH,
        },
    })
}

/// POST /api/v1/tones/suggest
pub async fn handle_suggest_tone(
    AppJson(request): AppJson<SuggestToneRequest>,
) -> Json<SuggestToneResponse> {
    let suggested_tone = suggest_tone(&request.topic);
    let message = (!request.topic.trim().is_empty())
        .then(|| format!("Suggested tone for your blog post: **{suggested_tone}**"));

    Json(SuggestToneResponse {
        message,
        description: suggested_tone.description(),
        suggested_tone,
        topic: request.topic,
    })
}

/// POST /api/v1/posts/generate
///
/// Validates input, then makes exactly one model call. Nothing reaches the
/// model unless topic, tone and length all pass validation.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    AppJson(request): AppJson<GeneratePostRequest>,
) -> Result<Json<GeneratePostResponse>, AppError> {
    let suggested_tone = suggest_tone(&request.topic);

    let tone = match request.tone.as_deref() {
        Some(raw) => raw.parse::<ToneLabel>().map_err(|e| {
            let valid: Vec<&str> = ALL_TONES.iter().map(ToneLabel::as_str).collect();
            AppError::Validation(format!("{e}; expected one of: {}", valid.join(", ")))
        })?,
        None => suggested_tone,
    };

    let generation = GenerationRequest::new(
        &request.topic,
        tone,
        request.length.unwrap_or(DEFAULT_LENGTH),
    )?;

    let content = generate_blog_post(state.llm.as_ref(), &generation).await?;

    Ok(Json(GeneratePostResponse {
        topic: generation.topic().to_string(),
        tone: generation.tone(),
        suggested_tone,
        length: generation.length(),
        status_message: generation.status_message(),
        content,
        generated_at: Utc::now(),
    }))
}
