//! Wizard steps and the transitions between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{AssessmentStatus, Session};
use crate::domain::foundation::StateMachine;

/// The screen a respondent is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Landing,
    CodeEntry,
    UserInfo,
    RoleSelection,
    Assessment,
    Results,
}

impl WizardStep {
    /// Step to show after resolving an access code to `session`.
    ///
    /// A completed session goes straight to its results, a started one
    /// resumes the assessment, anything else asks for the profile.
    pub fn for_session(session: &Session) -> Self {
        match (session.status(), session.role()) {
            (AssessmentStatus::Completed, _) => WizardStep::Results,
            (AssessmentStatus::InProgress, Some(_)) => WizardStep::Assessment,
            _ => WizardStep::UserInfo,
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Landing, CodeEntry)
                | (CodeEntry, UserInfo)
                | (CodeEntry, Assessment)
                | (CodeEntry, Results)
                | (UserInfo, RoleSelection)
                | (RoleSelection, Assessment)
                | (Assessment, Assessment)
                | (Assessment, Results)
                | (Results, CodeEntry)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Landing => vec![CodeEntry],
            CodeEntry => vec![UserInfo, Assessment, Results],
            UserInfo => vec![RoleSelection],
            RoleSelection => vec![Assessment],
            Assessment => vec![Assessment, Results],
            Results => vec![CodeEntry],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Landing => "landing",
            WizardStep::CodeEntry => "code_entry",
            WizardStep::UserInfo => "user_info",
            WizardStep::RoleSelection => "role_selection",
            WizardStep::Assessment => "assessment",
            WizardStep::Results => "results",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Language, Role};
    use crate::domain::foundation::AccessCode;

    fn session() -> Session {
        Session::new(AccessCode::new("ACME-1").unwrap(), Language::En)
    }

    #[test]
    fn new_session_goes_to_user_info() {
        assert_eq!(WizardStep::for_session(&session()), WizardStep::UserInfo);
    }

    #[test]
    fn started_session_resumes_assessment() {
        let mut s = session();
        s.select_role(Role::Operations).unwrap();
        assert_eq!(WizardStep::for_session(&s), WizardStep::Assessment);
    }

    #[test]
    fn completed_session_goes_to_results() {
        let mut s = session();
        s.select_role(Role::Operations).unwrap();
        s.complete().unwrap();
        assert_eq!(WizardStep::for_session(&s), WizardStep::Results);
    }

    #[test]
    fn no_step_is_terminal() {
        use WizardStep::*;
        for step in [Landing, CodeEntry, UserInfo, RoleSelection, Assessment, Results] {
            assert!(!step.is_terminal(), "{step} should have an exit");
        }
    }

    #[test]
    fn steps_cannot_be_skipped() {
        assert!(WizardStep::Landing.transition_to(WizardStep::Assessment).is_err());
        assert!(WizardStep::UserInfo.transition_to(WizardStep::Results).is_err());
        assert_eq!(
            WizardStep::Assessment.transition_to(WizardStep::Assessment),
            Ok(WizardStep::Assessment)
        );
    }
}
