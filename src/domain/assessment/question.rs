//! Question catalog entries.

use serde::{Deserialize, Serialize};

use super::{CapabilityDomain, Language, Role};

/// Question text in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Returns the text for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Immutable Likert-scale question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question identifier (e.g. "q1").
    pub id: String,
    /// Domain the question contributes to.
    pub domain: CapabilityDomain,
    /// Question wording per language.
    pub text: LocalizedText,
    /// Roles for which the question is shown.
    pub roles: Vec<Role>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        domain: CapabilityDomain,
        text: LocalizedText,
        roles: impl Into<Vec<Role>>,
    ) -> Self {
        Self {
            id: id.into(),
            domain,
            text,
            roles: roles.into(),
        }
    }

    /// Returns true if respondents with `role` see this question.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns the question text in the given language.
    pub fn text_in(&self, language: Language) -> &str {
        self.text.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "q1",
            CapabilityDomain::Governance,
            LocalizedText::new("Is there a strategy?", "هل توجد استراتيجية؟"),
            vec![Role::Executive, Role::IT],
        )
    }

    #[test]
    fn visibility_follows_role_list() {
        let q = sample();
        assert!(q.is_visible_to(Role::IT));
        assert!(!q.is_visible_to(Role::Operations));
    }

    #[test]
    fn text_is_selected_by_language() {
        let q = sample();
        assert_eq!(q.text_in(Language::En), "Is there a strategy?");
        assert_eq!(q.text_in(Language::Ar), "هل توجد استراتيجية؟");
    }
}
