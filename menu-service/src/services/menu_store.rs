//! Persistence accessor for menu items.
//!
//! Both implementations parse the identifier and validate the update before
//! touching any data, so callers see the same errors whichever store is wired in.

use crate::models::{MenuItem, MenuItemUpdate};
use crate::services::database::MongoDb;
use crate::services::error::StoreError;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use validator::Validate;

#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Replace name, description and price of one item and return it as stored afterwards.
    async fn update_by_id(&self, id: &str, update: MenuItemUpdate)
        -> Result<MenuItem, StoreError>;

    /// Remove one item and return it as it was before removal.
    async fn delete_by_id(&self, id: &str) -> Result<MenuItem, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

#[derive(Clone)]
pub struct MongoMenuStore {
    db: MongoDb,
}

impl MongoMenuStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    fn replacement(update: &MenuItemUpdate) -> Document {
        let mut set = doc! {
            "name": update.name.as_str(),
            "price": update.price,
        };
        match &update.description {
            Some(description) => {
                set.insert("description", description.as_str());
                doc! { "$set": set }
            }
            None => doc! { "$set": set, "$unset": { "description": "" } },
        }
    }
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn update_by_id(
        &self,
        id: &str,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, StoreError> {
        let oid = parse_id(id)?;
        update.validate()?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.db
            .menu_items()
            .find_one_and_update(doc! { "_id": oid }, Self::replacement(&update), options)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %id, "Failed to update menu item: {}", e);
                StoreError::from(e)
            })?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> Result<MenuItem, StoreError> {
        let oid = parse_id(id)?;

        self.db
            .menu_items()
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %id, "Failed to delete menu item: {}", e);
                StoreError::from(e)
            })?
            .ok_or(StoreError::NotFound)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.db.health_check().await
    }
}
