//! Cart endpoint adapter.
//!
//! Reads the host page's cart data endpoint over the network-call port. The
//! data path is deliberately absent from the mutation endpoint set, so a
//! refresh reading the cart never schedules another refresh.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use cw_core::cart::RawCartSnapshot;
use cw_core::ports::{CartSourceError, CartSourcePort, HttpCallPort, HttpRequest};

/// Path of the cart data endpoint, relative to the page origin.
pub const CART_DATA_PATH: &str = "/cart.js";

pub struct HttpCartSource {
    http: Arc<dyn HttpCallPort>,
    origin: String,
}

impl HttpCartSource {
    pub fn new(http: Arc<dyn HttpCallPort>, origin: impl Into<String>) -> Self {
        Self {
            http,
            origin: origin.into(),
        }
    }

    fn cart_url(&self) -> String {
        format!("{}{}", self.origin, CART_DATA_PATH)
    }
}

#[async_trait]
impl CartSourcePort for HttpCartSource {
    async fn fetch_cart(&self) -> Result<RawCartSnapshot, CartSourceError> {
        let url = self.cart_url();
        debug!(url = %url, "fetching cart snapshot");

        let response = self
            .http
            .call(HttpRequest::get(url))
            .await
            .map_err(|e| CartSourceError::Unreachable(e.to_string()))?;

        if !response.is_success() {
            return Err(CartSourceError::BadStatus(response.status));
        }

        serde_json::from_slice(&response.body).map_err(|e| CartSourceError::Malformed(e.to_string()))
    }
}
