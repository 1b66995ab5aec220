//! Outcome of a narrative (AI recommendations) request.

use serde::{Deserialize, Serialize};

use super::Language;

/// What the respondent sees in the recommendations panel.
///
/// Every variant carries displayable text; only `Generated` holds model
/// output, the others hold a localized placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum NarrativeOutcome {
    /// The generator returned non-empty markdown.
    Generated(String),
    /// The generator succeeded but returned nothing.
    Empty(String),
    /// No generator is configured.
    Unavailable(String),
    /// The generator failed.
    Failed(String),
}

impl NarrativeOutcome {
    /// Wraps generator output, mapping blank text to `Empty`.
    pub fn from_text(text: String, language: Language) -> Self {
        if text.trim().is_empty() {
            Self::empty(language)
        } else {
            Self::Generated(text)
        }
    }

    pub fn empty(language: Language) -> Self {
        let text = match language {
            Language::En => "No recommendations generated.",
            Language::Ar => "لم يتم إنشاء توصيات.",
        };
        Self::Empty(text.to_string())
    }

    pub fn unavailable(language: Language) -> Self {
        let text = match language {
            Language::En => "AI Recommendations unavailable (Missing API Key).",
            Language::Ar => "توصيات الذكاء الاصطناعي غير متاحة (مفتاح API مفقود).",
        };
        Self::Unavailable(text.to_string())
    }

    pub fn failed(language: Language) -> Self {
        let text = match language {
            Language::En => "Error generating recommendations. Please try again later.",
            Language::Ar => "حدث خطأ أثناء إنشاء التوصيات. يرجى المحاولة مرة أخرى لاحقاً.",
        };
        Self::Failed(text.to_string())
    }

    /// Text to render, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(t) | Self::Empty(t) | Self::Unavailable(t) | Self::Failed(t) => t,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}
