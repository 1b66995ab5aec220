//! Answer values and answers.
//!
//! On the wire an answer value is either an integer 1-5 or one of the
//! markers `"NA"` and `"NotSure"`. In memory it is a tagged union, so
//! scoring can match on it and only the numeric arm contributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Likert score from 1 (lowest maturity) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikertScore(u8);

impl LikertScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a score, returning error if outside 1-5.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "answer",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for LikertScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value a respondent gave to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnswerValueRepr", into = "AnswerValueRepr")]
pub enum AnswerValue {
    Numeric(LikertScore),
    NotApplicable,
    NotSure,
}

impl AnswerValue {
    /// Creates a numeric answer, validating the 1-5 range.
    pub fn numeric(value: i64) -> Result<Self, ValidationError> {
        LikertScore::try_new(value).map(AnswerValue::Numeric)
    }

    /// Returns the score if the answer counts towards scoring.
    pub fn score(&self) -> Option<LikertScore> {
        match self {
            AnswerValue::Numeric(score) => Some(*score),
            AnswerValue::NotApplicable | AnswerValue::NotSure => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AnswerValueRepr {
    Numeric(i64),
    Marker(AnswerMarker),
}

#[derive(Serialize, Deserialize)]
enum AnswerMarker {
    #[serde(rename = "NA")]
    NotApplicable,
    NotSure,
}

impl TryFrom<AnswerValueRepr> for AnswerValue {
    type Error = ValidationError;

    fn try_from(repr: AnswerValueRepr) -> Result<Self, Self::Error> {
        match repr {
            AnswerValueRepr::Numeric(n) => AnswerValue::numeric(n),
            AnswerValueRepr::Marker(AnswerMarker::NotApplicable) => Ok(AnswerValue::NotApplicable),
            AnswerValueRepr::Marker(AnswerMarker::NotSure) => Ok(AnswerValue::NotSure),
        }
    }
}

impl From<AnswerValue> for AnswerValueRepr {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Numeric(score) => AnswerValueRepr::Numeric(i64::from(score.value())),
            AnswerValue::NotApplicable => AnswerValueRepr::Marker(AnswerMarker::NotApplicable),
            AnswerValue::NotSure => AnswerValueRepr::Marker(AnswerMarker::NotSure),
        }
    }
}

/// A respondent's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }

    /// Shorthand for a numeric answer; fails outside 1-5.
    pub fn numeric(question_id: impl Into<String>, value: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(question_id, AnswerValue::numeric(value)?))
    }
}
