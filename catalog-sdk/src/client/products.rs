//! Products resource client (front end → product API).
//!
//! Every call is a single request against one fixed resource URL. Failures
//! are never retried; a non-2xx answer surfaces as [`ClientError::Api`]
//! carrying the body exactly as the server sent it.

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{ClientError, ErrorPayload};
use crate::objects::Product;

/// Sort key used by [`ProductsClient::list_all`] when the caller passes none.
pub const DEFAULT_SORT_KEY: &str = "name";

/// Typed HTTP client for the **products** resource.
///
/// The resource URL (e.g. `http://localhost:8081/api/products`) is fixed at
/// construction. Individual products live at `{base}/{barcode}`.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    http: Client,
    base_url: Url,
}

impl ProductsClient {
    /// Create a new `ProductsClient`.
    ///
    /// * `base_url` – the products resource URL. A trailing slash, query and
    ///   fragment are dropped.
    pub fn new(mut base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// The normalized resource URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn product_url(&self, barcode: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(barcode);
        }
        url
    }

    /// `GET {base}?sortBy={key}` – list every product.
    ///
    /// `None` sorts by [`DEFAULT_SORT_KEY`]; an empty key omits the query
    /// entirely and leaves the order to the server.
    pub async fn list_all(&self, sort_by: Option<&str>) -> Result<Vec<Product>, ClientError> {
        let sort_by = sort_by.unwrap_or(DEFAULT_SORT_KEY);

        let mut url = self.base_url.clone();
        if !sort_by.is_empty() {
            url.query_pairs_mut().append_pair("sortBy", sort_by);
        }

        debug!(%url, "GET products");
        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    /// `GET {base}/{barcode}` – fetch a single product.
    pub async fn get_one(&self, barcode: &str) -> Result<Product, ClientError> {
        let url = self.product_url(barcode);

        debug!(%url, "GET product");
        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    /// `POST {base}` – create a product. Returns the product as stored.
    pub async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        let url = self.base_url.clone();

        debug!(%url, barcode = %product.barcode, "POST product");
        let resp = self.http.post(url).json(product).send().await?;

        parse_response(resp).await
    }

    /// `PATCH {base}/{previous_barcode}` – update a product.
    ///
    /// The body's barcode may differ from `previous_barcode`, which renames
    /// the product.
    pub async fn update(
        &self,
        product: &Product,
        previous_barcode: &str,
    ) -> Result<Product, ClientError> {
        let url = self.product_url(previous_barcode);

        debug!(%url, barcode = %product.barcode, "PATCH product");
        let resp = self.http.patch(url).json(product).send().await?;

        parse_response(resp).await
    }

    /// `DELETE {base}/{barcode}` – delete a product. Any success body is
    /// ignored.
    pub async fn remove(&self, barcode: &str) -> Result<(), ClientError> {
        let url = self.product_url(barcode);

        debug!(%url, "DELETE product");
        let resp = self.http.delete(url).send().await?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        Ok(())
    }
}

async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    debug!(%status, "product API answered with an error");
    ClientError::Api(ErrorPayload::from_body(body))
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
