//! In-memory stand-in for the product API used by view tests.

use crate::gateway::ProductGateway;
use async_trait::async_trait;
use catalog_sdk::client::{ClientError, ErrorPayload};
use catalog_sdk::objects::Product;
use std::sync::{Arc, Mutex};

/// A gateway call as recorded by [`FakeGateway`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListAll(Option<String>),
    GetOne(String),
    Create(Product),
    Update(Product, String),
    Remove(String),
}

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    failure: Option<String>,
    calls: Vec<Call>,
}

/// Keeps products in memory and rejects empty barcodes the way the real API
/// does. Clones share state.
#[derive(Clone, Default)]
pub(crate) struct FakeGateway {
    state: Arc<Mutex<FakeState>>,
}

impl FakeGateway {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let gateway = Self::default();
        gateway.state.lock().unwrap().products = products;
        gateway
    }

    /// Make every following call fail with `body` as the server payload.
    pub(crate) fn fail_with(&self, body: &str) {
        self.state.lock().unwrap().failure = Some(body.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn stored(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.failure {
            Some(body) => Err(api_error(body)),
            None => Ok(()),
        }
    }
}

fn api_error(body: &str) -> ClientError {
    ClientError::Api(ErrorPayload::Text(body.to_string()))
}

fn check_barcode(barcode: &str) -> Result<(), ClientError> {
    if barcode.is_empty() {
        return Err(api_error("Barcode cannot be empty"));
    }
    Ok(())
}

#[async_trait]
impl ProductGateway for FakeGateway {
    async fn list_all(&self, sort_by: Option<&str>) -> Result<Vec<Product>, ClientError> {
        self.record(Call::ListAll(sort_by.map(str::to_string)))?;
        Ok(self.stored())
    }

    async fn get_one(&self, barcode: &str) -> Result<Product, ClientError> {
        self.record(Call::GetOne(barcode.to_string()))?;
        check_barcode(barcode)?;
        self.stored()
            .into_iter()
            .find(|p| p.barcode == barcode)
            .ok_or_else(|| api_error(&format!("Product not found with barcode: {barcode}")))
    }

    async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        self.record(Call::Create(product.clone()))?;
        check_barcode(&product.barcode)?;
        self.state.lock().unwrap().products.push(product.clone());
        Ok(product.clone())
    }

    async fn update(
        &self,
        product: &Product,
        previous_barcode: &str,
    ) -> Result<Product, ClientError> {
        self.record(Call::Update(product.clone(), previous_barcode.to_string()))?;
        check_barcode(previous_barcode)?;
        let mut state = self.state.lock().unwrap();
        match state.products.iter_mut().find(|p| p.barcode == previous_barcode) {
            Some(stored) => *stored = product.clone(),
            None => {
                return Err(api_error(&format!(
                    "Product not found with barcode: {previous_barcode}"
                )));
            }
        }
        Ok(product.clone())
    }

    async fn remove(&self, barcode: &str) -> Result<(), ClientError> {
        self.record(Call::Remove(barcode.to_string()))?;
        check_barcode(barcode)?;
        self.state.lock().unwrap().products.retain(|p| p.barcode != barcode);
        Ok(())
    }
}
