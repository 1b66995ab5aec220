//! Scoring engine - turns answers into per-domain and overall maturity.
//!
//! Pure and deterministic: no I/O, no clock. "Not applicable" and "not sure"
//! answers are left out of both numerator and denominator, and domains with
//! no numeric answers are left out of the overall average, so uncertainty
//! and domains a role never sees do not pull the organization's score down.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Answer, CapabilityDomain, Catalog, MaturityLevel};

/// Upper end of the Likert scale.
pub const MAX_SCORE: f64 = 5.0;

/// Average score of one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub domain: CapabilityDomain,
    /// Mean of numeric answers, 0-5, two decimals. Zero when unanswered.
    pub score: f64,
    pub max_score: f64,
}

impl DomainScore {
    /// Returns true if at least one numeric answer contributed.
    pub fn is_scored(&self) -> bool {
        self.score > 0.0
    }
}

/// Scored report for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub overall_score: f64,
    pub maturity_level: MaturityLevel,
    /// One entry per catalog domain, in catalog order.
    pub domain_scores: Vec<DomainScore>,
}

impl AssessmentResult {
    pub fn domain_score(&self, domain: CapabilityDomain) -> Option<&DomainScore> {
        self.domain_scores.iter().find(|d| d.domain == domain)
    }
}

#[derive(Default)]
struct Tally {
    total: u32,
    count: u32,
}

/// Calculator for assessment results.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores a (possibly partial) set of answers against a catalog.
    ///
    /// Answers referencing questions missing from the catalog are ignored.
    pub fn score(catalog: &Catalog, answers: &[Answer]) -> AssessmentResult {
        let mut tallies: HashMap<CapabilityDomain, Tally> = HashMap::new();

        for answer in answers {
            let Some(score) = answer.value.score() else {
                continue;
            };
            let Some(question) = catalog.find_question(&answer.question_id) else {
                continue;
            };
            let tally = tallies.entry(question.domain).or_default();
            tally.total += u32::from(score.value());
            tally.count += 1;
        }

        let domain_scores: Vec<DomainScore> = catalog
            .domains()
            .iter()
            .map(|domain| {
                let score = match tallies.get(domain) {
                    Some(t) if t.count > 0 => round2(f64::from(t.total) / f64::from(t.count)),
                    _ => 0.0,
                };
                DomainScore {
                    domain: *domain,
                    score,
                    max_score: MAX_SCORE,
                }
            })
            .collect();

        let overall_score = Self::overall(&domain_scores);

        AssessmentResult {
            overall_score,
            maturity_level: MaturityLevel::from_score(overall_score),
            domain_scores,
        }
    }

    /// Mean of the scored domains; zero when none are scored.
    pub fn overall(domain_scores: &[DomainScore]) -> f64 {
        let total: f64 = domain_scores.iter().map(|d| d.score).sum();
        let scored = domain_scores.iter().filter(|d| d.is_scored()).count().max(1);
        round2(total / scored as f64)
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
