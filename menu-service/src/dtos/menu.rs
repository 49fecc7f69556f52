use crate::models::{MenuItem, MenuItemUpdate};
use crate::services::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_FIELDS_MESSAGE: &str = "Name and price are required";
pub const DELETED_MESSAGE: &str = "Menu item deleted successfully";

/// Body of `PUT /menu/:id`.
///
/// Fields are kept as raw JSON so the required-field check can apply loose
/// truthiness (`0`, `""`, `false` and `null` all count as missing) before any
/// type coercion happens.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItemRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

impl UpdateMenuItemRequest {
    /// Parse a request body. Anything that is not a JSON object yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn has_required_fields(&self) -> bool {
        is_truthy(self.name.as_ref()) && is_truthy(self.price.as_ref())
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

impl TryFrom<UpdateMenuItemRequest> for MenuItemUpdate {
    type Error = StoreError;

    fn try_from(req: UpdateMenuItemRequest) -> Result<Self, Self::Error> {
        Ok(MenuItemUpdate {
            name: cast_string("name", req.name)?.unwrap_or_default(),
            description: cast_string("description", req.description)?,
            price: cast_number("price", req.price)?,
        })
    }
}

fn cast_string(field: &str, value: Option<Value>) -> Result<Option<String>, StoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(StoreError::Validation(format!(
            "{}: cannot cast {} to a string",
            field, other
        ))),
    }
}

fn cast_number(field: &str, value: Option<Value>) -> Result<f64, StoreError> {
    match value {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| cast_error(field, &n)),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| cast_error(field, &s)),
        Some(Value::Bool(b)) => Ok(if b { 1.0 } else { 0.0 }),
        Some(other) => Err(cast_error(field, &other)),
        None => Err(StoreError::Validation(format!("{}: is required", field))),
    }
}

fn cast_error(field: &str, raw: impl std::fmt::Display) -> StoreError {
    StoreError::Validation(format!("{}: cannot cast {} to a number", field, raw))
}

/// A menu item as returned to clients.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_hex(),
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> UpdateMenuItemRequest {
        UpdateMenuItemRequest::from_body(body.to_string().as_bytes())
    }

    #[test]
    fn test_complete_request_has_required_fields() {
        let req = request(json!({ "name": "Burger", "description": "Beef patty", "price": 9.5 }));
        assert!(req.has_required_fields());
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        assert!(!request(json!({ "price": 9.5 })).has_required_fields());
        assert!(!request(json!({ "name": "", "price": 9.5 })).has_required_fields());
        assert!(!request(json!({ "name": null, "price": 9.5 })).has_required_fields());
        assert!(!request(json!({ "name": "Burger", "price": 0 })).has_required_fields());
        assert!(!request(json!({ "name": "Burger", "price": 0.0 })).has_required_fields());
        assert!(!request(json!({ "name": "Burger", "price": false })).has_required_fields());
        assert!(!request(json!({ "description": "no name" })).has_required_fields());
    }

    #[test]
    fn test_non_object_body_is_empty_request() {
        assert!(!UpdateMenuItemRequest::from_body(b"not json").has_required_fields());
        assert!(!UpdateMenuItemRequest::from_body(b"[\"Burger\", null, 9.5]").has_required_fields());
        assert!(!UpdateMenuItemRequest::from_body(b"").has_required_fields());
    }

    #[test]
    fn test_cast_accepts_numeric_string_price() {
        let update = MenuItemUpdate::try_from(request(json!({ "name": "Burger", "price": "9.5" })))
            .unwrap();
        assert_eq!(update.price, 9.5);
        assert_eq!(update.description, None);
    }

    #[test]
    fn test_cast_stringifies_scalar_name() {
        let update = MenuItemUpdate::try_from(request(json!({ "name": 42, "price": 1 }))).unwrap();
        assert_eq!(update.name, "42");
    }

    #[test]
    fn test_cast_maps_boolean_price_to_number() {
        let update = MenuItemUpdate::try_from(request(json!({ "name": "Burger", "price": true })))
            .unwrap();
        assert_eq!(update.price, 1.0);
    }

    #[test]
    fn test_cast_rejects_non_numeric_price() {
        let err = MenuItemUpdate::try_from(request(json!({ "name": "Burger", "price": "cheap" })))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref msg) if msg.starts_with("price:")));
    }

    #[test]
    fn test_cast_rejects_object_name() {
        let err = MenuItemUpdate::try_from(request(json!({ "name": { "en": "Burger" }, "price": 9.5 })))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref msg) if msg.starts_with("name:")));
    }

    #[test]
    fn test_response_uses_hex_id() {
        let item = MenuItem::new("Burger", None, 9.5);
        let hex = item.id.to_hex();
        let body = serde_json::to_value(MenuItemResponse::from(item)).unwrap();

        assert_eq!(body, json!({ "_id": hex, "name": "Burger", "price": 9.5 }));
    }
}
