pub mod database;
pub mod error;
pub mod menu_store;
pub mod metrics;
pub mod mock_store;

pub use database::MongoDb;
pub use error::{StoreError, NOT_FOUND_MESSAGE};
pub use menu_store::{MenuStore, MongoMenuStore};
pub use metrics::{get_metrics, init_metrics, record_menu_operation};
pub use mock_store::MockMenuStore;
