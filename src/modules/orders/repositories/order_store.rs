use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use super::super::models::Order;
use crate::config::StoreConfig;

/// Storage for orders keyed by gateway transaction id
///
/// The payment service only depends on this trait, so a durable backend can
/// replace the in-memory one without touching handler logic.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Find the order recorded for a transaction
    async fn get(&self, transaction_id: &str) -> Option<Order>;

    /// Record (or replace) the order for a transaction
    async fn put(&self, transaction_id: String, order: Order);
}

/// Bounded in-memory store
///
/// Entries expire after `ttl` and the total count never exceeds
/// `max_entries`; least recently used entries are evicted first.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    cache: Cache<String, Order>,
}

impl InMemoryOrderStore {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.max_entries, config.ttl)
    }

    /// Approximate number of live entries
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, transaction_id: &str) -> Option<Order> {
        self.cache.get(transaction_id).await
    }

    async fn put(&self, transaction_id: String, order: Order) {
        self.cache.insert(transaction_id, order).await;
    }
}
