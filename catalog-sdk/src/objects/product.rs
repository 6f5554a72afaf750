//! The product entity as it travels over the wire.

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product.
///
/// `barcode` is the identity key and always comes from the server; the client
/// never generates one on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Product {
    /// Create a product with the given barcode and name and every other field
    /// left empty.
    pub fn new(barcode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter for `tags`.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The product API may send `null` for optional columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
