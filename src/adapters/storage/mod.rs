//! Storage Adapters
//!
//! Key-value backends and the session repository built on them.
//!
//! ## Available Adapters
//!
//! - **InMemoryKeyValueStore** - Stores bytes in memory (testing/development)
//! - **RedisKeyValueStore** - Stores bytes in Redis (production)
//! - **KeyValueSessionRepository** - JSON sessions over any key-value store
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryKeyValueStore, KeyValueSessionRepository};
//!
//! let store = Arc::new(InMemoryKeyValueStore::new());
//! let sessions = KeyValueSessionRepository::new(store);
//! ```

mod in_memory_key_value_store;
mod kv_session_repository;
mod redis_key_value_store;

pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use kv_session_repository::{KeyValueSessionRepository, DEFAULT_SESSION_NAMESPACE};
pub use redis_key_value_store::RedisKeyValueStore;
