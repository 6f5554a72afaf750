//! View models for the catalog front end.
//!
//! - `ProductListView`: paginated list; subscribes to `product-added`,
//!   `product-edited` and `message-updated`, publishes `product-to-edit`
//! - `ProductForm`: create/edit form; subscribes to `product-to-edit`,
//!   publishes `product-added`, `product-edited` and `message-updated`
//!
//! Neither view renders anything. Both take the gateway and the channel at
//! construction and never reach for globals.

pub mod form;
pub mod list;
pub mod pagination;
pub mod tags;

pub use form::{FormMode, ProductForm};
pub use list::ProductListView;
pub use pagination::{PAGE_SIZE, Pager};
pub use tags::{format_tags, parse_tags};

use catalog_sdk::client::ClientError;

pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully";
pub const PRODUCT_EDITED_MESSAGE: &str = "Product edited successfully";
pub const PRODUCT_DELETED_MESSAGE: &str = "Product deleted successfully";

/// The status line shown for a failed gateway call.
pub fn error_message(error: &ClientError) -> String {
    format!("Error: {error}")
}
