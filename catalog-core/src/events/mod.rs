//! Notification channel shared by the catalog views.
//!
//! The list view and the form view never hold a reference to each other.
//! They only share a [`NotificationChannel`] and talk through its streams.
//!
//! # Event Flow
//!
//! 1. List view publishes `product-to-edit` -> form view loads the product
//! 2. Form view saves it, publishes `product-edited` -> list view replaces it
//! 3. Form view creates one, publishes `product-added` -> list view appends it
//! 4. Either view publishes `message-updated` -> list view shows the status line
//!
//! Streams do not replay: a subscriber only sees what is published after it
//! subscribed.

pub mod channels;
pub mod types;

pub use channels::{NotificationChannel, Subscription};
pub use types::StreamName;
