//! Deferred-execution port.

use std::time::Duration;

use async_trait::async_trait;

/// Schedules a pause before the widget refresh runs, so intercepted cart
/// mutations settle before the cart is re-read. Faked in tests to avoid
/// real timing.
#[async_trait]
pub trait DelayPort: Send + Sync {
    async fn delay(&self, duration: Duration);
}
