//! Redis-backed key-value store for production deployments.
//!
//! Plain GET/SET over a multiplexed connection; each call is bounded by the
//! configured timeout.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::future::Future;
use std::time::Duration;

use crate::ports::{KeyValueStore, StorageError};

/// Redis key-value store.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    conn: MultiplexedConnection,
    timeout: Duration,
}

impl RedisKeyValueStore {
    pub fn new(conn: MultiplexedConnection, timeout: Duration) -> Self {
        Self { conn, timeout }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self, StorageError> {
        let client =
            redis::Client::open(url).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let conn = tokio::time::timeout(timeout, client.get_multiplexed_async_connection())
            .await
            .map_err(|_| StorageError::Timeout)?
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(Self::new(conn, timeout))
    }

    async fn bounded<T>(
        &self,
        op: impl Future<Output = redis::RedisResult<T>>,
    ) -> Result<T, StorageError> {
        tokio::time::timeout(self.timeout, op)
            .await
            .map_err(|_| StorageError::Timeout)?
            .map_err(map_redis_error)
    }
}

fn map_redis_error(err: redis::RedisError) -> StorageError {
    if err.is_connection_dropped() || err.is_connection_refusal() || err.is_io_error() {
        StorageError::Unavailable(err.to_string())
    } else if err.is_timeout() {
        StorageError::Timeout
    } else {
        StorageError::backend(err.to_string())
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let mut conn = self.conn.clone();
        self.bounded(async move { conn.get::<_, Option<Vec<u8>>>(key).await })
            .await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        self.bounded(async move { conn.set::<_, _, ()>(key, value).await })
            .await
    }
}
