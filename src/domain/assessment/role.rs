//! Respondent roles, which decide the questions a respondent sees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Language;
use crate::domain::foundation::ValidationError;

/// Organizational role selected by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Executive,
    IT,
    Operations,
    Analytics,
    Compliance,
}

impl Role {
    /// All roles, in the order they are offered.
    pub const ALL: [Role; 5] = [
        Role::Executive,
        Role::IT,
        Role::Operations,
        Role::Analytics,
        Role::Compliance,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Executive => "Executive",
            Role::IT => "IT",
            Role::Operations => "Operations",
            Role::Analytics => "Analytics",
            Role::Compliance => "Compliance",
        }
    }

    /// Display label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Role::Executive) => "Executive / Leadership",
            (Language::En, Role::IT) => "IT / Engineering",
            (Language::En, Role::Operations) => "Operations",
            (Language::En, Role::Analytics) => "Data & Analytics",
            (Language::En, Role::Compliance) => "Legal & Compliance",
            (Language::Ar, Role::Executive) => "تنفيذي / قيادة",
            (Language::Ar, Role::IT) => "تكنولوجيا المعلومات / هندسة",
            (Language::Ar, Role::Operations) => "العمليات",
            (Language::Ar, Role::Analytics) => "البيانات والتحليلات",
            (Language::Ar, Role::Compliance) => "القانون والامتثال",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("role", format!("unknown role '{}'", s))
            })
    }
}
