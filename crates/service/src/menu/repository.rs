use async_trait::async_trait;
use configs::IdStrategy;
use models::{MenuItem, MenuItemInput};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Storage abstraction for the menu collection.
///
/// Implementations keep insertion order and perform each find-then-mutate
/// step atomically.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MenuItem>, ServiceError>;
    async fn get(&self, id: u64) -> Result<Option<MenuItem>, ServiceError>;
    /// Assign an id, append, and return the stored item.
    async fn insert(&self, input: MenuItemInput) -> Result<MenuItem, ServiceError>;
    /// Overwrite the first item with `id`. `None` if there is no such item.
    async fn replace(&self, id: u64, input: MenuItemInput) -> Result<Option<MenuItem>, ServiceError>;
    /// Remove the first item with `id`; returns whether it existed.
    async fn remove(&self, id: u64) -> Result<bool, ServiceError>;
    async fn len(&self) -> Result<usize, ServiceError>;
}

struct Catalog {
    items: Vec<MenuItem>,
    // highest id ever stored, for IdStrategy::Monotonic
    high_water: u64,
}

impl Catalog {
    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

/// Process-local collection behind a single async lock.
pub struct InMemoryMenuRepository {
    inner: RwLock<Catalog>,
    strategy: IdStrategy,
}

impl InMemoryMenuRepository {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_items(Vec::new(), strategy)
    }

    pub fn with_items(items: Vec<MenuItem>, strategy: IdStrategy) -> Self {
        let high_water = items.iter().map(|i| i.id).max().unwrap_or(0);
        Self { inner: RwLock::new(Catalog { items, high_water }), strategy }
    }

    pub fn strategy(&self) -> IdStrategy { self.strategy }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, ServiceError> {
        let catalog = self.inner.read().await;
        Ok(catalog.items.clone())
    }

    async fn get(&self, id: u64) -> Result<Option<MenuItem>, ServiceError> {
        let catalog = self.inner.read().await;
        Ok(catalog.items.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, input: MenuItemInput) -> Result<MenuItem, ServiceError> {
        let mut catalog = self.inner.write().await;
        let id = match self.strategy {
            IdStrategy::SizeBased => catalog.items.len() as u64 + 1,
            IdStrategy::Monotonic => catalog.high_water + 1,
        };
        catalog.high_water = catalog.high_water.max(id);
        let item = input.into_item(id);
        catalog.items.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, id: u64, input: MenuItemInput) -> Result<Option<MenuItem>, ServiceError> {
        let mut catalog = self.inner.write().await;
        let Some(idx) = catalog.position(id) else {
            return Ok(None);
        };
        let item = input.into_item(id);
        catalog.items[idx] = item.clone();
        Ok(Some(item))
    }

    async fn remove(&self, id: u64) -> Result<bool, ServiceError> {
        let mut catalog = self.inner.write().await;
        match catalog.position(id) {
            Some(idx) => {
                catalog.items.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn len(&self) -> Result<usize, ServiceError> {
        Ok(self.inner.read().await.items.len())
    }
}
