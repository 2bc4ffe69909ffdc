//! Cart data source port.

use async_trait::async_trait;
use thiserror::Error;

use crate::cart::RawCartSnapshot;

#[derive(Debug, Error)]
pub enum CartSourceError {
    #[error("cart endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("cart endpoint returned status {0}")]
    BadStatus(u16),

    #[error("cart payload malformed: {0}")]
    Malformed(String),
}

/// The host's cart data endpoint.
///
/// Invoked with no parameters and expected to return the current cart
/// snapshot. A failure aborts the calling refresh cycle; there is no retry.
#[async_trait]
pub trait CartSourcePort: Send + Sync {
    async fn fetch_cart(&self) -> Result<RawCartSnapshot, CartSourceError>;
}
