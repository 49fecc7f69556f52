//! Menu item endpoints: `PUT /menu/:id` and `DELETE /menu/:id`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::dtos::menu::{DELETED_MESSAGE, MISSING_FIELDS_MESSAGE};
use crate::dtos::{MenuItemResponse, MessageResponse, UpdateMenuItemRequest};
use crate::models::MenuItemUpdate;
use crate::services::menu_store::parse_id;
use crate::services::{record_menu_operation, StoreError};
use crate::AppState;
use service_core::error::AppError;

/// Replace the name, description and price of a menu item.
#[tracing::instrument(skip(state, body))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MenuItemResponse>, AppError> {
    let req = UpdateMenuItemRequest::from_body(&body);

    if !req.has_required_fields() {
        record_menu_operation("update", "rejected");
        return Err(AppError::BadRequest(anyhow::anyhow!(MISSING_FIELDS_MESSAGE)));
    }

    let result = match parse_id(&id).and_then(|_| MenuItemUpdate::try_from(req)) {
        Ok(update) => state.store.update_by_id(&id, update).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(item) => {
            record_menu_operation("update", "ok");
            tracing::info!(menu_item_id = %id, "Menu item updated");
            Ok(Json(MenuItemResponse::from(item)))
        }
        Err(e) => {
            record_menu_operation("update", outcome(&e));
            tracing::warn!(menu_item_id = %id, error = %e, "Menu item update failed");
            Err(e.into())
        }
    }
}

/// Remove a menu item.
#[tracing::instrument(skip(state))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    match state.store.delete_by_id(&id).await {
        Ok(item) => {
            record_menu_operation("delete", "ok");
            tracing::info!(menu_item_id = %id, name = %item.name, "Menu item deleted");
            Ok(Json(MessageResponse {
                message: DELETED_MESSAGE.to_string(),
            }))
        }
        Err(e) => {
            record_menu_operation("delete", outcome(&e));
            tracing::warn!(menu_item_id = %id, error = %e, "Menu item delete failed");
            Err(e.into())
        }
    }
}

fn outcome(err: &StoreError) -> &'static str {
    match err {
        StoreError::NotFound => "not_found",
        StoreError::InvalidIdentifier(_) | StoreError::Validation(_) => "rejected",
        StoreError::Database(_) | StoreError::Internal(_) => "error",
    }
}
