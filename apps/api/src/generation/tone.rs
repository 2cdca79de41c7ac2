//! Tone catalog and keyword-based tone suggestion.
//!
//! The suggester walks `TONE_RULES` in order and returns the first tone whose
//! keyword set has a hit. Rule order decides ties between categories, so it is
//! a slice and never a map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the sixteen writing tones a post can be generated in.
/// Serializes as its human-readable label (e.g. `"casual and fun"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    #[serde(rename = "professional")]
    Professional,
    #[serde(rename = "casual and fun")]
    CasualAndFun,
    #[serde(rename = "informative and educational")]
    InformativeAndEducational,
    #[serde(rename = "inspirational")]
    Inspirational,
    #[serde(rename = "conversational")]
    Conversational,
    #[serde(rename = "humorous")]
    Humorous,
    #[serde(rename = "authoritative")]
    Authoritative,
    #[serde(rename = "empathetic")]
    Empathetic,
    #[serde(rename = "storytelling")]
    Storytelling,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "persuasive")]
    Persuasive,
    #[serde(rename = "analytical")]
    Analytical,
    #[serde(rename = "neutral/objective")]
    NeutralObjective,
    #[serde(rename = "enthusiastic")]
    Enthusiastic,
    #[serde(rename = "reflective")]
    Reflective,
    #[serde(rename = "urgent")]
    Urgent,
}

/// Every tone, in the order the selection control lists them.
pub const ALL_TONES: [ToneLabel; 16] = [
    ToneLabel::Professional,
    ToneLabel::CasualAndFun,
    ToneLabel::InformativeAndEducational,
    ToneLabel::Inspirational,
    ToneLabel::Conversational,
    ToneLabel::Humorous,
    ToneLabel::Authoritative,
    ToneLabel::Empathetic,
    ToneLabel::Storytelling,
    ToneLabel::Technical,
    ToneLabel::Persuasive,
    ToneLabel::Analytical,
    ToneLabel::NeutralObjective,
    ToneLabel::Enthusiastic,
    ToneLabel::Reflective,
    ToneLabel::Urgent,
];

/// Returned by the suggester when no rule matches.
pub const FALLBACK_TONE: ToneLabel = ToneLabel::InformativeAndEducational;

/// Preselected in the form before the user has typed a topic.
pub const FORM_DEFAULT_TONE: ToneLabel = ToneLabel::Professional;

impl ToneLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Professional => "professional",
            ToneLabel::CasualAndFun => "casual and fun",
            ToneLabel::InformativeAndEducational => "informative and educational",
            ToneLabel::Inspirational => "inspirational",
            ToneLabel::Conversational => "conversational",
            ToneLabel::Humorous => "humorous",
            ToneLabel::Authoritative => "authoritative",
            ToneLabel::Empathetic => "empathetic",
            ToneLabel::Storytelling => "storytelling",
            ToneLabel::Technical => "technical",
            ToneLabel::Persuasive => "persuasive",
            ToneLabel::Analytical => "analytical",
            ToneLabel::NeutralObjective => "neutral/objective",
            ToneLabel::Enthusiastic => "enthusiastic",
            ToneLabel::Reflective => "reflective",
            ToneLabel::Urgent => "urgent",
        }
    }

    /// Short description shown next to the label in the tone picker.
    pub fn description(&self) -> &'static str {
        match self {
            ToneLabel::Professional => "Formal, polished, and authoritative. Ideal for business, corporate communication, finance, or B2B writing.",
            ToneLabel::CasualAndFun => "Friendly, conversational, and upbeat. Great for lifestyle blogs, brand storytelling, or community content.",
            ToneLabel::InformativeAndEducational => "Clear, helpful, and focused on teaching. Perfect for tutorials, explainers, and how-to guides.",
            ToneLabel::Inspirational => "Motivational, uplifting, and emotionally driven. Best for personal development, leadership, or nonprofit storytelling.",
            ToneLabel::Conversational => "Relaxed and approachable, like chatting with a friend. Works well for blogs, newsletters, podcasts, or community posts.",
            ToneLabel::Humorous => "Witty, clever, and playful. Excellent for entertainment, satire, pop culture, or youth-centered content.",
            ToneLabel::Authoritative => "Confident, precise, and grounded in expertise. Useful for whitepapers, legal content, policy, or compliance topics.",
            ToneLabel::Empathetic => "Compassionate, understanding, and supportive. Ideal for wellness, mental health, caregiving, or DEI-focused content.",
            ToneLabel::Storytelling => "Narrative-rich and emotionally engaging. Effective for case studies, founder stories, brand journeys, or memoir-style posts.",
            ToneLabel::Technical => "Detailed, structured, and focused on accuracy. Best for developer blogs, software documentation, engineering, or scientific topics.",
            ToneLabel::Persuasive => "Influential and benefit-focused. Great for marketing copy, sales pages, calls-to-action, or advocacy-driven writing.",
            ToneLabel::Analytical => "Data-centric, logical, and focused on insights. Perfect for reports, reviews, comparisons, or performance breakdowns.",
            ToneLabel::NeutralObjective => "Balanced and unbiased. Suitable for journalism, research summaries, or documentation without strong opinion.",
            ToneLabel::Enthusiastic => "Energetic, passionate, and high-energy. Ideal for product launches, fandom content, or event promotions.",
            ToneLabel::Reflective => "Thoughtful and introspective. Great for personal blogs, lessons learned, or philosophical topics.",
            ToneLabel::Urgent => "Direct, fast-paced, and action-oriented. Best for alerts, crisis communication, or limited-time campaigns.",
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}'")]
pub struct UnknownTone(pub String);

impl FromStr for ToneLabel {
    type Err = UnknownTone;

    /// Accepts a catalog label, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_TONES
            .iter()
            .copied()
            .find(|tone| tone.as_str() == wanted)
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

/// A catalog row as exposed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ToneEntry {
    pub label: ToneLabel,
    pub description: &'static str,
}

/// The full tone catalog in display order.
pub fn tone_catalog() -> Vec<ToneEntry> {
    ALL_TONES
        .iter()
        .map(|&label| ToneEntry {
            label,
            description: label.description(),
        })
        .collect()
}

struct ToneRule {
    tone: ToneLabel,
    keywords: &'static [&'static str],
}

/// Evaluated top to bottom; first hit wins.
const TONE_RULES: &[ToneRule] = &[
    ToneRule {
        tone: ToneLabel::Professional,
        keywords: &["business", "corporate", "finance", "b2b", "leadership"],
    },
    ToneRule {
        tone: ToneLabel::CasualAndFun,
        keywords: &["fun", "lifestyle", "entertainment", "pop culture", "travel"],
    },
    ToneRule {
        tone: ToneLabel::InformativeAndEducational,
        keywords: &["tutorial", "how-to", "guide", "education", "learning", "explainer"],
    },
    ToneRule {
        tone: ToneLabel::Inspirational,
        keywords: &["motivation", "inspiration", "self-help", "nonprofit", "empowerment"],
    },
    ToneRule {
        tone: ToneLabel::Conversational,
        keywords: &["newsletter", "community", "blog", "personal"],
    },
    ToneRule {
        tone: ToneLabel::Humorous,
        keywords: &["humor", "comedy", "joke", "funny", "satire"],
    },
    ToneRule {
        tone: ToneLabel::Authoritative,
        keywords: &["legal", "policy", "compliance", "government", "regulation"],
    },
    ToneRule {
        tone: ToneLabel::Empathetic,
        keywords: &["mental health", "wellness", "trauma", "support", "caregiving"],
    },
    ToneRule {
        tone: ToneLabel::Storytelling,
        keywords: &["story", "case study", "journey", "narrative", "founder"],
    },
    ToneRule {
        tone: ToneLabel::Technical,
        keywords: &[
            "developer",
            "engineering",
            "programming",
            "code",
            "software",
            "data science",
        ],
    },
    ToneRule {
        tone: ToneLabel::Persuasive,
        keywords: &["marketing", "sales", "conversion", "campaign", "pitch"],
    },
    ToneRule {
        tone: ToneLabel::Analytical,
        keywords: &["analysis", "metrics", "report", "review", "breakdown"],
    },
    ToneRule {
        tone: ToneLabel::NeutralObjective,
        keywords: &["journalism", "reporting", "research", "summary"],
    },
    ToneRule {
        tone: ToneLabel::Enthusiastic,
        keywords: &["launch", "event", "promotion", "celebration"],
    },
    ToneRule {
        tone: ToneLabel::Reflective,
        keywords: &["reflection", "insight", "introspection", "lessons"],
    },
    ToneRule {
        tone: ToneLabel::Urgent,
        keywords: &["alert", "urgent", "emergency", "breaking", "now"],
    },
];

/// Suggests a tone for a free-text topic.
///
/// Matching is a case-insensitive substring test with no tokenization, so
/// "history" hits the `story` keyword and "snow" hits `now`. Never fails:
/// topics that match nothing, including empty ones, get `FALLBACK_TONE`.
pub fn suggest_tone(topic: &str) -> ToneLabel {
    let topic = topic.to_lowercase();

    TONE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| topic.contains(kw)))
        .map(|rule| rule.tone)
        .unwrap_or(FALLBACK_TONE)
}
