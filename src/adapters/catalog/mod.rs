//! Question catalog adapters.
//!
//! - **StaticQuestionCatalog** - Serves a catalog compiled into the binary

mod static_catalog;

pub use static_catalog::StaticQuestionCatalog;
