//! The paginated product list.
//!
//! The list view owns its own copy of the products. It changes them only
//! after the server confirmed a change: on load, on a successful delete, and
//! when the form view announces an added or edited product.

use super::pagination::Pager;
use super::{PRODUCT_DELETED_MESSAGE, error_message};
use crate::events::{NotificationChannel, Subscription};
use crate::gateway::ProductGateway;
use catalog_sdk::objects::Product;
use tracing::{debug, error, info};

pub struct ProductListView<G> {
    gateway: G,
    channel: NotificationChannel,
    products: Vec<Product>,
    message: String,
    pager: Pager,
    /// Barcode most recently sent to the form, used to place a renamed product.
    pending_edit: Option<String>,
    added: Subscription<Product>,
    edited: Subscription<Product>,
    messages: Subscription<String>,
}

impl<G: ProductGateway> ProductListView<G> {
    /// Create the view and subscribe it to `product-added`, `product-edited`
    /// and `message-updated`.
    pub fn new(gateway: G, channel: NotificationChannel) -> Self {
        let added = channel.subscribe_product_added();
        let edited = channel.subscribe_product_edited();
        let messages = channel.subscribe_message_updated();
        Self {
            gateway,
            channel,
            products: Vec::new(),
            message: String::new(),
            pager: Pager::default(),
            pending_edit: None,
            added,
            edited,
            messages,
        }
    }

    /// Fetch every product, replacing the current list.
    ///
    /// An empty `sort_by` leaves ordering to the server.
    pub async fn load(&mut self, sort_by: &str) {
        match self.gateway.list_all(Some(sort_by)).await {
            Ok(products) => {
                info!(count = products.len(), sort_by, "Products loaded");
                self.products = products;
                self.message.clear();
                self.pager.go_to(self.pager.current_page(), self.products.len());
            }
            Err(e) => {
                self.message = error_message(&e);
                error!(message = %self.message, "Error fetching products");
            }
        }
    }

    /// Delete a product server-side, then drop it from the list.
    pub async fn delete(&mut self, barcode: &str) {
        match self.gateway.remove(barcode).await {
            Ok(()) => {
                self.products.retain(|p| p.barcode != barcode);
                if self.pager.step_back_if_empty(self.products.len()) {
                    debug!(page = self.pager.current_page(), "Current page emptied, stepped back");
                }
                self.set_message(PRODUCT_DELETED_MESSAGE.to_string());
            }
            Err(e) => {
                let message = error_message(&e);
                error!(%message, barcode, "Error deleting product");
                self.set_message(message);
            }
        }
    }

    /// Hand a copy of the product to whichever view edits products.
    ///
    /// Returns `false` when no listed product has `barcode`.
    pub fn request_edit(&mut self, barcode: &str) -> bool {
        let Some(product) = self.products.iter().find(|p| p.barcode == barcode) else {
            return false;
        };
        self.channel.notify_product_to_edit(product.clone());
        self.pending_edit = Some(barcode.to_string());
        true
    }

    /// Apply every notification received since the last call. Returns how
    /// many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        for product in self.added.drain() {
            self.on_product_added(product);
            applied += 1;
        }
        for product in self.edited.drain() {
            self.on_product_edited(product);
            applied += 1;
        }
        for message in self.messages.drain() {
            self.on_message(message);
            applied += 1;
        }
        applied
    }

    pub fn on_product_added(&mut self, product: Product) {
        debug!(barcode = %product.barcode, "Product added");
        self.products.push(product);
    }

    /// Replace the product with the same barcode. When the edit renamed the
    /// barcode, the entry that was sent for editing is replaced instead.
    pub fn on_product_edited(&mut self, product: Product) {
        let pending = self.pending_edit.take();
        let index = self
            .products
            .iter()
            .position(|p| p.barcode == product.barcode)
            .or_else(|| {
                let previous = pending.as_deref()?;
                self.products.iter().position(|p| p.barcode == previous)
            });

        debug!(barcode = %product.barcode, replaced = index.is_some(), "Product edited");
        match index {
            Some(index) => self.products[index] = product,
            None => self.products.push(product),
        }
    }

    pub fn on_message(&mut self, message: String) {
        self.message = message;
    }

    fn set_message(&mut self, message: String) {
        self.message = message.clone();
        self.channel.notify_message_updated(message);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The products on the current page.
    pub fn visible_products(&self) -> &[Product] {
        self.pager.slice(&self.products)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.products.len())
    }

    pub fn change_page(&mut self, page: usize) {
        self.pager.go_to(page, self.products.len());
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.products.len());
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }
}
