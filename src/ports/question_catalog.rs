//! Question catalog port.

use async_trait::async_trait;

use crate::domain::assessment::{Catalog, Question, Role};
use crate::domain::foundation::DomainError;

/// Source of the questions shown to each role.
///
/// Results must be deterministic: the same role always yields the same
/// questions in the same order.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// Questions visible to `role`, in catalog order.
    async fn questions_for_role(&self, role: Role) -> Result<Vec<Question>, DomainError>;

    /// The full catalog, used for scoring.
    fn catalog(&self) -> &Catalog;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn QuestionCatalog) {}
    }
}
