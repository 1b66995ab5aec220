//! Maturity level derived from the overall score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Language;

/// Discrete maturity label, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Advanced,
    Optimized,
}

/// Inclusive lower bounds, highest level first.
const THRESHOLDS: [(f64, MaturityLevel); 4] = [
    (4.3, MaturityLevel::Optimized),
    (3.5, MaturityLevel::Advanced),
    (2.7, MaturityLevel::Defined),
    (1.9, MaturityLevel::Developing),
];

impl MaturityLevel {
    /// Maps an overall score (0-5) to its level.
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(lower_bound, _)| score >= *lower_bound)
            .map(|(_, level)| *level)
            .unwrap_or(MaturityLevel::Initial)
    }

    /// The level above this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            MaturityLevel::Initial => Some(MaturityLevel::Developing),
            MaturityLevel::Developing => Some(MaturityLevel::Defined),
            MaturityLevel::Defined => Some(MaturityLevel::Advanced),
            MaturityLevel::Advanced => Some(MaturityLevel::Optimized),
            MaturityLevel::Optimized => None,
        }
    }

    /// Canonical English label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Advanced => "Advanced",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// Display label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, level) => level.as_str(),
            (Language::Ar, MaturityLevel::Initial) => "أولي (Initial)",
            (Language::Ar, MaturityLevel::Developing) => "نامي (Developing)",
            (Language::Ar, MaturityLevel::Defined) => "محدد (Defined)",
            (Language::Ar, MaturityLevel::Advanced) => "متقدم (Advanced)",
            (Language::Ar, MaturityLevel::Optimized) => "محسن (Optimized)",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
