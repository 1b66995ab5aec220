//! Session repository port.
//!
//! Persists `Session` aggregates whole, keyed by access code.

use async_trait::async_trait;

use crate::domain::assessment::Session;
use crate::domain::foundation::{AccessCode, DomainError};

/// Repository port for Session aggregate persistence.
///
/// Implementations must replace the stored record on every save; there is
/// no field-level merge.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find the session stored under `code`.
    ///
    /// Returns `None` if the code has never been used.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backend is unreachable
    /// - `SerializationError` if the stored record cannot be decoded
    async fn find(&self, code: &AccessCode) -> Result<Option<Session>, DomainError>;

    /// Save the whole session under its code.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;
}
