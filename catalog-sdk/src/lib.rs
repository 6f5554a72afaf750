#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Wire types and HTTP client for the product catalog API.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
