//! Catalog adapter serving an in-process `Catalog`.

use async_trait::async_trait;

use crate::domain::assessment::{Catalog, Question, Role};
use crate::domain::foundation::DomainError;
use crate::ports::QuestionCatalog;

/// Question catalog backed by a `'static` catalog value.
#[derive(Debug, Clone, Copy)]
pub struct StaticQuestionCatalog {
    catalog: &'static Catalog,
}

impl StaticQuestionCatalog {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// The built-in data maturity catalog.
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }
}

impl Default for StaticQuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[async_trait]
impl QuestionCatalog for StaticQuestionCatalog {
    async fn questions_for_role(&self, role: Role) -> Result<Vec<Question>, DomainError> {
        Ok(self.catalog.questions_for_role(role))
    }

    fn catalog(&self) -> &Catalog {
        self.catalog
    }
}
