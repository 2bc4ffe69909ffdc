//! Fetch-primitive decorator that watches for cart mutations.
//!
//! Wraps the page's network primitive and passes every request and response
//! through untouched. When a completed call's resolved URL matches one of
//! the cart mutation endpoints, a widget refresh is scheduled after a short
//! delay on a detached task. Transport errors never schedule anything.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use cw_core::cart::is_cart_mutation_url;
use cw_core::ports::{DelayPort, HttpCallError, HttpCallPort, HttpRequest, HttpResponse};

use crate::use_cases::RefreshWidget;

/// Pause between an observed mutation and the refresh, giving the storefront
/// time to settle follow-up requests of its own.
pub const REFRESH_DELAY: Duration = Duration::from_millis(100);

pub struct ObservedHttpClient {
    inner: Arc<dyn HttpCallPort>,
    origin: String,
    delay: Arc<dyn DelayPort>,
    refresh: Arc<RefreshWidget>,
}

impl ObservedHttpClient {
    pub fn new(
        inner: Arc<dyn HttpCallPort>,
        origin: impl Into<String>,
        delay: Arc<dyn DelayPort>,
        refresh: Arc<RefreshWidget>,
    ) -> Self {
        Self {
            inner,
            origin: origin.into(),
            delay,
            refresh,
        }
    }

    fn schedule_refresh(&self) {
        let delay = Arc::clone(&self.delay);
        let refresh = Arc::clone(&self.refresh);
        tokio::spawn(async move {
            delay.delay(REFRESH_DELAY).await;
            refresh.run().await;
        });
    }
}

#[async_trait]
impl HttpCallPort for ObservedHttpClient {
    async fn call(&self, request: HttpRequest) -> Result<HttpResponse, HttpCallError> {
        let result = self.inner.call(request).await;

        if let Ok(response) = &result {
            if is_cart_mutation_url(&self.origin, &response.url) {
                debug!(url = %response.url, "cart mutation observed");
                self.schedule_refresh();
            }
        }

        result
    }
}
