use std::sync::Arc;

use models::{MenuItem, MenuItemInput};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::repository::MenuRepository;
use crate::{errors::ServiceError, validation::parse_menu_item};

/// Menu catalog business service, independent of the web framework.
pub struct MenuService<R: MenuRepository> {
    repo: Arc<R>,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    pub async fn list(&self) -> Result<Vec<MenuItem>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: u64) -> Result<MenuItem, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(id))
    }

    /// Validate a raw body and add it to the catalog.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use configs::IdStrategy;
    /// use service::menu::{InMemoryMenuRepository, MenuService};
    /// let repo = Arc::new(InMemoryMenuRepository::with_items(models::seed::seed_menu(), IdStrategy::SizeBased));
    /// let svc = MenuService::new(repo);
    /// let body = serde_json::json!({
    ///     "name": "Nachos",
    ///     "description": "Loaded tortilla chips",
    ///     "price": 6.5,
    ///     "category": "appetizer",
    ///     "ingredients": ["chips", "cheese"]
    /// });
    /// let item = tokio_test::block_on(svc.create(&body)).unwrap();
    /// assert_eq!(item.id, 7);
    /// assert_eq!(item.available, Some(true));
    /// ```
    pub async fn create(&self, body: &Value) -> Result<MenuItem, ServiceError> {
        let input = self.checked(body)?;
        self.create_input(input).await
    }

    /// Insert an already validated candidate. `available` defaults to `true`.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_input(&self, mut input: MenuItemInput) -> Result<MenuItem, ServiceError> {
        input.available.get_or_insert(true);
        let item = self.repo.insert(input).await?;
        info!(id = item.id, category = %item.category, "menu_item_created");
        Ok(item)
    }

    /// Validate a raw body, then replace item `id` with it.
    ///
    /// Validation runs before the lookup, so a bad body is reported even when
    /// the id does not exist.
    pub async fn replace(&self, id: u64, body: &Value) -> Result<MenuItem, ServiceError> {
        let input = self.checked(body)?;
        self.replace_input(id, input).await
    }

    /// Replace item `id` with an already validated candidate.
    /// `available` is stored as given; there is no default here.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn replace_input(&self, id: u64, input: MenuItemInput) -> Result<MenuItem, ServiceError> {
        let item = self
            .repo
            .replace(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))?;
        info!(id, "menu_item_replaced");
        Ok(item)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found(id));
        }
        info!(id, "menu_item_deleted");
        Ok(())
    }

    fn checked(&self, body: &Value) -> Result<MenuItemInput, ServiceError> {
        parse_menu_item(body).inspect_err(|e| {
            debug!(violations = e.violations().len(), "menu_item_rejected");
        })
    }
}
