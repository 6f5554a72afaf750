#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Product catalog front end core: the notification channel, the gateway
//! seam, and the list and form view models.

pub mod events;
pub mod gateway;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
