pub mod health;
pub mod menu;
pub mod metrics;

pub use health::{health_check, readiness_check};
pub use menu::{delete_menu_item, update_menu_item};
