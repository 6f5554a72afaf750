//! The seam between the views and the product API.

use async_trait::async_trait;
use catalog_sdk::client::{ClientError, ProductsClient};
use catalog_sdk::objects::Product;

/// The five operations the views need from the product API.
///
/// Every failure is a [`ClientError`]; for server-side failures it displays
/// as the server's error body verbatim.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// List every product. `None` uses the default sort key, an empty key
    /// leaves ordering to the server.
    async fn list_all(&self, sort_by: Option<&str>) -> Result<Vec<Product>, ClientError>;

    async fn get_one(&self, barcode: &str) -> Result<Product, ClientError>;

    /// Create a product; returns the product as the server stored it.
    async fn create(&self, product: &Product) -> Result<Product, ClientError>;

    /// Update the product currently stored under `previous_barcode`.
    async fn update(
        &self,
        product: &Product,
        previous_barcode: &str,
    ) -> Result<Product, ClientError>;

    async fn remove(&self, barcode: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl ProductGateway for ProductsClient {
    async fn list_all(&self, sort_by: Option<&str>) -> Result<Vec<Product>, ClientError> {
        ProductsClient::list_all(self, sort_by).await
    }

    async fn get_one(&self, barcode: &str) -> Result<Product, ClientError> {
        ProductsClient::get_one(self, barcode).await
    }

    async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        ProductsClient::create(self, product).await
    }

    async fn update(
        &self,
        product: &Product,
        previous_barcode: &str,
    ) -> Result<Product, ClientError> {
        ProductsClient::update(self, product, previous_barcode).await
    }

    async fn remove(&self, barcode: &str) -> Result<(), ClientError> {
        ProductsClient::remove(self, barcode).await
    }
}
