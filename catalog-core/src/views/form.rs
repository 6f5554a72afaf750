//! The create/edit form.
//!
//! The form works on its own draft copy of a product. It enters editing mode
//! when a `product-to-edit` notification arrives and remembers the barcode
//! the product had at that point, which keys the update request.

use super::tags::{format_tags, parse_tags};
use super::{PRODUCT_ADDED_MESSAGE, PRODUCT_EDITED_MESSAGE, error_message};
use crate::events::{NotificationChannel, Subscription};
use crate::gateway::ProductGateway;
use catalog_sdk::objects::Product;
use tracing::{debug, error, info};

/// Whether a submit creates a new product or updates an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Adding,
    Editing {
        /// Barcode of the product before any change made in the form.
        previous_barcode: String,
    },
}

pub struct ProductForm<G> {
    gateway: G,
    channel: NotificationChannel,
    draft: Product,
    tags_input: String,
    mode: FormMode,
    to_edit: Subscription<Product>,
}

impl<G: ProductGateway> ProductForm<G> {
    /// Create the form and subscribe it to `product-to-edit`.
    pub fn new(gateway: G, channel: NotificationChannel) -> Self {
        let to_edit = channel.subscribe_product_to_edit();
        Self {
            gateway,
            channel,
            draft: Product::default(),
            tags_input: String::new(),
            mode: FormMode::Adding,
            to_edit,
        }
    }

    /// Apply every pending `product-to-edit` notification; the last one wins.
    pub fn sync(&mut self) -> usize {
        let pending = self.to_edit.drain();
        let applied = pending.len();
        for product in pending {
            self.on_product_to_edit(product);
        }
        applied
    }

    pub fn on_product_to_edit(&mut self, product: Product) {
        debug!(barcode = %product.barcode, "Loading product into form");
        self.tags_input = format_tags(&product.tags);
        self.mode = FormMode::Editing {
            previous_barcode: product.barcode.clone(),
        };
        self.draft = product;
    }

    pub fn draft(&self) -> &Product {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Product {
        &mut self.draft
    }

    /// The raw comma-separated tag field. Parsed into the draft on submit.
    pub fn tags_input(&self) -> &str {
        &self.tags_input
    }

    pub fn set_tags_input(&mut self, tags: impl Into<String>) {
        self.tags_input = tags.into();
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing { .. })
    }

    pub fn previous_barcode(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Editing { previous_barcode } => Some(previous_barcode),
            FormMode::Adding => None,
        }
    }

    /// Clear the draft and the tag field and go back to adding.
    pub fn reset(&mut self) {
        self.draft = Product::default();
        self.tags_input.clear();
        self.mode = FormMode::Adding;
    }

    /// Create or update the draft, depending on the mode.
    ///
    /// The outcome is announced on the channel; the saved product is also
    /// returned. Failures are turned into a `message-updated` notification
    /// and yield `None`.
    pub async fn submit(&mut self) -> Option<Product> {
        self.draft.tags = parse_tags(&self.tags_input);
        match self.mode.clone() {
            FormMode::Adding => self.submit_add().await,
            FormMode::Editing { previous_barcode } => self.submit_edit(&previous_barcode).await,
        }
    }

    async fn submit_add(&mut self) -> Option<Product> {
        match self.gateway.create(&self.draft).await {
            Ok(added) => {
                info!(barcode = %added.barcode, "Product added");
                self.channel.notify_product_added(added.clone());
                self.reset();
                self.channel.notify_message_updated(PRODUCT_ADDED_MESSAGE);
                Some(added)
            }
            Err(e) => {
                let message = error_message(&e);
                error!(%message, "Error adding product");
                self.channel.notify_message_updated(message);
                None
            }
        }
    }

    async fn submit_edit(&mut self, previous_barcode: &str) -> Option<Product> {
        let result = self.gateway.update(&self.draft, previous_barcode).await;
        self.mode = FormMode::Adding;
        match result {
            Ok(edited) => {
                info!(barcode = %edited.barcode, previous_barcode, "Product edited");
                self.channel.notify_product_edited(edited.clone());
                self.reset();
                self.channel.notify_message_updated(PRODUCT_EDITED_MESSAGE);
                Some(edited)
            }
            Err(e) => {
                let message = error_message(&e);
                error!(%message, previous_barcode, "Error editing product");
                self.channel.notify_message_updated(message);
                None
            }
        }
    }
}
