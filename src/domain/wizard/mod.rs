//! Wizard module - the respondent's path through the survey.
//!
//! Steps run Landing → CodeEntry → UserInfo → RoleSelection → Assessment →
//! Results. There is no terminal step: a respondent can always start over
//! with another code.

mod progress;
mod resume;
mod state;
mod step;

pub use progress::Progress;
pub use resume::resume_index;
pub use state::WizardState;
pub use step::WizardStep;
