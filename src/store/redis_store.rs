use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::SessionStore;
use super::keys::namespaced_key;
use crate::error::StoreError;

/// Record kept in Redis under `{namespace}:{key}`.
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
    namespace: String,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>, namespace: &str) -> Self {
        Self {
            redis,
            namespace: namespace.to_string(),
        }
    }

    pub fn open(url: &str, namespace: &str) -> Result<Self, StoreError> {
        let client = RedisClient::open(url)?;
        Ok(Self::new(Arc::new(client), namespace))
    }

    fn key(&self, key: &str) -> String {
        namespaced_key(&self.namespace, key)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        // MULTI/EXEC so readers never see half a record
        let mut pipe = redis::pipe();
        pipe.atomic();
        for (key, value) in entries {
            pipe.set(self.key(key), value).ignore();
        }
        let _: () = pipe.query_async(&mut conn).await?;

        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let keys: Vec<String> = keys.iter().map(|k| self.key(k)).collect();
        let _: () = conn.del(keys).await?;

        Ok(())
    }
}
