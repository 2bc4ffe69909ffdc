//! Tokio-backed delay adapter.

use std::time::Duration;

use async_trait::async_trait;

use cw_core::ports::DelayPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl DelayPort for TokioDelay {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
