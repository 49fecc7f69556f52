pub mod menu;

pub use menu::{MenuItemResponse, MessageResponse, UpdateMenuItemRequest};
