use crate::models::{MenuItem, MenuItemUpdate};
use crate::services::error::StoreError;
use crate::services::menu_store::{parse_id, MenuStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Mutex;
use validator::Validate;

/// In-memory [`MenuStore`] used by tests and local runs without MongoDB.
pub struct MockMenuStore {
    pub items: Mutex<HashMap<ObjectId, MenuItem>>,
}

impl Default for MockMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMenuStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    /// Seed an item, standing in for the creation path the HTTP surface lacks.
    pub fn insert(
        &self,
        name: &str,
        description: Option<&str>,
        price: f64,
    ) -> Result<MenuItem, StoreError> {
        let item = MenuItem::new(name, description.map(str::to_string), price);
        self.lock()?.insert(item.id, item.clone());
        Ok(item)
    }

    pub fn get(&self, id: &ObjectId) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<ObjectId, MenuItem>>, StoreError> {
        self.items
            .lock()
            .map_err(|e| StoreError::Internal(format!("Mock store mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl MenuStore for MockMenuStore {
    async fn update_by_id(
        &self,
        id: &str,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, StoreError> {
        let oid = parse_id(id)?;
        update.validate()?;

        let mut items = self.lock()?;
        let item = items.get_mut(&oid).ok_or(StoreError::NotFound)?;
        item.apply(update);
        Ok(item.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<MenuItem, StoreError> {
        let oid = parse_id(id)?;
        self.lock()?.remove(&oid).ok_or(StoreError::NotFound)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
