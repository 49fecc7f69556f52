use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A stored menu item. `_id` is assigned by the store and never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            description,
            price,
        }
    }

    /// Overwrite every mutable field. `description: None` clears it.
    pub fn apply(&mut self, update: MenuItemUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
    }
}

/// Full replacement of a menu item's mutable fields.
#[derive(Debug, Clone, Validate, PartialEq)]
pub struct MenuItemUpdate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("price");
        err.message = Some("must be a finite number".into());
        Err(err)
    }
}
