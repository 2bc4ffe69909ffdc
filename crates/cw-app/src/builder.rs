//! Runtime assembly.
//!
//! The builder collects the ports the embedding layer provides and wires the
//! use cases into a [`WidgetRuntime`]. The runtime owns the overlay history
//! and hands out observed network clients on request.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use cw_core::overlay::OverlayHistory;
use cw_core::ports::{CartSourcePort, DelayPort, HttpCallPort, OverlayDomPort, WidgetPort};

use crate::observed_client::ObservedHttpClient;
use crate::use_cases::{ReconcileOverlays, RefreshError, RefreshOutcome, RefreshWidget};

#[derive(Default)]
pub struct WidgetRuntimeBuilder {
    cart_source: Option<Arc<dyn CartSourcePort>>,
    widget: Option<Arc<dyn WidgetPort>>,
    overlay_dom: Option<Arc<dyn OverlayDomPort>>,
    delay: Option<Arc<dyn DelayPort>>,
    origin: Option<String>,
    with_popup: bool,
}

impl WidgetRuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cart_source(mut self, cart_source: Arc<dyn CartSourcePort>) -> Self {
        self.cart_source = Some(cart_source);
        self
    }

    pub fn with_widget(mut self, widget: Arc<dyn WidgetPort>) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn with_overlay_dom(mut self, overlay_dom: Arc<dyn OverlayDomPort>) -> Self {
        self.overlay_dom = Some(overlay_dom);
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelayPort>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_popup(mut self, enabled: bool) -> Self {
        self.with_popup = enabled;
        self
    }

    pub fn build(self) -> anyhow::Result<WidgetRuntime> {
        let cart_source = self
            .cart_source
            .ok_or_else(|| anyhow!("cart source is required"))?;
        let widget = self.widget.ok_or_else(|| anyhow!("widget is required"))?;
        let overlay_dom = self
            .overlay_dom
            .ok_or_else(|| anyhow!("overlay dom is required"))?;
        let delay = self.delay.ok_or_else(|| anyhow!("delay is required"))?;
        let origin = self.origin.ok_or_else(|| anyhow!("origin is required"))?;

        let history = Arc::new(Mutex::new(OverlayHistory::new()));
        let reconciler = ReconcileOverlays::new(overlay_dom, Arc::clone(&history), self.with_popup);
        let refresh = Arc::new(RefreshWidget::new(cart_source, widget, reconciler));

        Ok(WidgetRuntime {
            refresh,
            history,
            delay,
            origin,
        })
    }
}

pub struct WidgetRuntime {
    refresh: Arc<RefreshWidget>,
    history: Arc<Mutex<OverlayHistory>>,
    delay: Arc<dyn DelayPort>,
    origin: String,
}

impl WidgetRuntime {
    pub fn builder() -> WidgetRuntimeBuilder {
        WidgetRuntimeBuilder::new()
    }

    /// Runs one refresh cycle, surfacing the failure to the caller.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        self.refresh.execute().await
    }

    /// Boundary variant of [`Self::refresh`]; failures are logged and
    /// swallowed.
    pub async fn refresh_and_log(&self) {
        self.refresh.run().await
    }

    pub fn overlay_history(&self) -> Arc<Mutex<OverlayHistory>> {
        Arc::clone(&self.history)
    }

    /// Wraps the page's network primitive so cart mutations schedule
    /// refreshes against this runtime.
    pub fn observe(&self, inner: Arc<dyn HttpCallPort>) -> Arc<ObservedHttpClient> {
        Arc::new(ObservedHttpClient::new(
            inner,
            self.origin.clone(),
            Arc::clone(&self.delay),
            Arc::clone(&self.refresh),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use cw_core::cart::{NormalizedOrder, RawCartSnapshot};
    use cw_core::overlay::OverlayHandle;
    use cw_core::ports::{CartSourceError, WidgetRenderError};

    struct EmptyCartSource;

    #[async_trait]
    impl CartSourcePort for EmptyCartSource {
        async fn fetch_cart(&self) -> Result<RawCartSnapshot, CartSourceError> {
            Ok(RawCartSnapshot::empty_placeholder())
        }
    }

    struct NullWidget;

    #[async_trait]
    impl WidgetPort for NullWidget {
        async fn render(&self, _order: &NormalizedOrder) -> Result<(), WidgetRenderError> {
            Ok(())
        }
    }

    struct NullOverlayDom;

    impl OverlayDomPort for NullOverlayDom {
        fn find_new_overlay(&self) -> Option<OverlayHandle> {
            None
        }

        fn neutralize(&self, _handle: &OverlayHandle) {}

        fn move_to_root(&self, _handle: &OverlayHandle) {}

        fn is_visible(&self, _handle: &OverlayHandle) -> bool {
            false
        }
    }

    struct InstantDelay;

    #[async_trait]
    impl DelayPort for InstantDelay {
        async fn delay(&self, _duration: Duration) {}
    }

    fn complete_builder() -> WidgetRuntimeBuilder {
        WidgetRuntime::builder()
            .with_cart_source(Arc::new(EmptyCartSource))
            .with_widget(Arc::new(NullWidget))
            .with_overlay_dom(Arc::new(NullOverlayDom))
            .with_delay(Arc::new(InstantDelay))
            .with_origin("https://shop.example.com")
    }

    #[tokio::test]
    async fn complete_builder_produces_a_working_runtime() {
        let runtime = complete_builder().build().unwrap();
        let outcome = runtime.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::EmptyCart);
        assert!(runtime.overlay_history().lock().unwrap().is_empty());
    }

    #[test]
    fn missing_cart_source_is_rejected() {
        let result = WidgetRuntime::builder()
            .with_widget(Arc::new(NullWidget))
            .with_overlay_dom(Arc::new(NullOverlayDom))
            .with_delay(Arc::new(InstantDelay))
            .with_origin("https://shop.example.com")
            .build();

        assert!(result.unwrap_err().to_string().contains("cart source"));
    }

    #[test]
    fn missing_origin_is_rejected() {
        let result = complete_builder().build().map(|_| ());
        assert!(result.is_ok());

        let without_origin = WidgetRuntime::builder()
            .with_cart_source(Arc::new(EmptyCartSource))
            .with_widget(Arc::new(NullWidget))
            .with_overlay_dom(Arc::new(NullOverlayDom))
            .with_delay(Arc::new(InstantDelay))
            .build();
        assert!(without_origin.unwrap_err().to_string().contains("origin"));
    }
}
