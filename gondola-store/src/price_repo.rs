use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use gondola_core::repository::BasePriceRepository;
use gondola_core::ticket::BasePrice;

/// In-memory base price store, keyed by ticket-type string.
///
/// Setting a price for an existing type overwrites the previous cost.
pub struct MemoryPriceRepository {
    prices: RwLock<HashMap<String, u32>>,
}

impl MemoryPriceRepository {
    pub fn new() -> Self {
        Self { prices: RwLock::new(HashMap::new()) }
    }

    pub fn with_seed(seed: &HashMap<String, u32>) -> Self {
        Self { prices: RwLock::new(seed.clone()) }
    }
}

impl Default for MemoryPriceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePriceRepository for MemoryPriceRepository {
    async fn set_base_price(
        &self,
        kind: &str,
        cost: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut prices = self.prices.write().await;
        prices.insert(kind.to_string(), cost);
        Ok(())
    }

    async fn find_base_price(
        &self,
        kind: &str,
    ) -> Result<Option<BasePrice>, Box<dyn std::error::Error + Send + Sync>> {
        let prices = self.prices.read().await;
        Ok(prices
            .get(kind)
            .map(|cost| BasePrice { kind: kind.to_string(), cost: *cost }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_type_has_no_base_price() {
        let repo = MemoryPriceRepository::new();
        let found = repo.find_base_price("1jour").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn set_then_find_round_trips() {
        let repo = MemoryPriceRepository::new();
        repo.set_base_price("1jour", 35).await.unwrap();

        let found = repo.find_base_price("1jour").await.unwrap().unwrap();
        assert_eq!(found.kind, "1jour");
        assert_eq!(found.cost, 35);
    }

    #[tokio::test]
    async fn setting_again_overwrites() {
        let repo = MemoryPriceRepository::new();
        repo.set_base_price("night", 19).await.unwrap();
        repo.set_base_price("night", 21).await.unwrap();

        let found = repo.find_base_price("night").await.unwrap().unwrap();
        assert_eq!(found.cost, 21);
    }

    #[tokio::test]
    async fn seeds_from_config_map() {
        let mut seed = HashMap::new();
        seed.insert("1jour".to_string(), 35);
        let repo = MemoryPriceRepository::with_seed(&seed);

        let found = repo.find_base_price("1jour").await.unwrap().unwrap();
        assert_eq!(found.cost, 35);
    }
}
