//! Respondent profile captured before role selection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Profile information about the respondent and their organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub organization: String,
    /// Organization size band, e.g. "51-200".
    pub size: String,
    pub industry: String,
    #[serde(default)]
    pub country: String,
    pub job_title: String,
}

impl UserInfo {
    /// Checks that every required field is filled in.
    ///
    /// Country is optional; everything else is required and the email must
    /// contain an `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("organization", &self.organization),
            ("job_title", &self.job_title),
            ("industry", &self.industry),
            ("size", &self.size),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        if !self.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> UserInfo {
        UserInfo {
            name: "Layla Haddad".to_string(),
            email: "layla@example.com".to_string(),
            organization: "Acme".to_string(),
            size: "51-200".to_string(),
            industry: "Finance".to_string(),
            country: String::new(),
            job_title: "CDO".to_string(),
        }
    }

    #[test]
    fn complete_profile_is_valid_without_country() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn blank_required_field_is_reported_by_name() {
        let info = UserInfo {
            organization: "  ".to_string(),
            ..valid()
        };
        assert_eq!(
            info.validate(),
            Err(ValidationError::empty_field("organization"))
        );
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let info = UserInfo {
            email: "layla.example.com".to_string(),
            ..valid()
        };
        assert!(matches!(
            info.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn uses_camel_case_field_names() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["jobTitle"], "CDO");
    }
}
