//! In-memory widget library.
//!
//! Mirrors the real bundle's observable behavior: construction from init
//! plus options, rendering into the container, and overlay injection on
//! render when the popup feature is on.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cw_core::cart::NormalizedOrder;
use cw_core::ports::{
    CartWidgetOptions, WidgetConstructError, WidgetInit, WidgetLibraryPort, WidgetLoaderPort,
    WidgetPort, WidgetRenderError,
};

use crate::memory_page::InMemoryOverlayDom;

struct InMemoryWidget {
    with_popup: bool,
    overlays: Arc<InMemoryOverlayDom>,
    renders: Arc<Mutex<Vec<NormalizedOrder>>>,
}

#[async_trait]
impl WidgetPort for InMemoryWidget {
    async fn render(&self, order: &NormalizedOrder) -> Result<(), WidgetRenderError> {
        if self.with_popup {
            self.overlays.inject();
        }
        match self.renders.lock() {
            Ok(mut guard) => guard.push(order.clone()),
            Err(poisoned) => poisoned.into_inner().push(order.clone()),
        }
        Ok(())
    }
}

pub struct InMemoryWidgetLibrary {
    overlays: Arc<InMemoryOverlayDom>,
    renders: Arc<Mutex<Vec<NormalizedOrder>>>,
    constructions: Mutex<Vec<WidgetInit>>,
}

impl InMemoryWidgetLibrary {
    pub fn new(overlays: Arc<InMemoryOverlayDom>) -> Self {
        Self {
            overlays,
            renders: Arc::new(Mutex::new(Vec::new())),
            constructions: Mutex::new(Vec::new()),
        }
    }

    /// Every order rendered by any widget constructed from this library.
    pub fn renders(&self) -> Vec<NormalizedOrder> {
        match self.renders.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn constructions(&self) -> Vec<WidgetInit> {
        match self.constructions.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl WidgetLibraryPort for InMemoryWidgetLibrary {
    fn cart(
        &self,
        init: &WidgetInit,
        options: CartWidgetOptions,
    ) -> Result<Arc<dyn WidgetPort>, WidgetConstructError> {
        match self.constructions.lock() {
            Ok(mut guard) => guard.push(init.clone()),
            Err(poisoned) => poisoned.into_inner().push(init.clone()),
        }
        Ok(Arc::new(InMemoryWidget {
            with_popup: options.with_popup,
            overlays: Arc::clone(&self.overlays),
            renders: Arc::clone(&self.renders),
        }))
    }
}

/// Loader that hands out a pre-built library, counting load requests so
/// tests can assert idempotence.
pub struct InMemoryWidgetLoader {
    library: Arc<InMemoryWidgetLibrary>,
    loads: AtomicUsize,
    requested_urls: Mutex<Vec<String>>,
}

impl InMemoryWidgetLoader {
    pub fn new(library: Arc<InMemoryWidgetLibrary>) -> Self {
        Self {
            library,
            loads: AtomicUsize::new(0),
            requested_urls: Mutex::new(Vec::new()),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        match self.requested_urls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl WidgetLoaderPort for InMemoryWidgetLoader {
    async fn ensure_loaded(&self, bundle_url: &str) -> anyhow::Result<Arc<dyn WidgetLibraryPort>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match self.requested_urls.lock() {
            Ok(mut guard) => guard.push(bundle_url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(bundle_url.to_string()),
        }
        Ok(Arc::clone(&self.library) as Arc<dyn WidgetLibraryPort>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::cart::{normalize, RawCartSnapshot};
    use cw_core::config::WidgetConfig;
    use cw_core::ports::OverlayDomPort;

    fn options(with_popup: bool) -> CartWidgetOptions {
        let config = WidgetConfig {
            with_popup,
            ..WidgetConfig::default()
        };
        CartWidgetOptions::from_config(&config, normalize(&RawCartSnapshot::empty_placeholder()))
    }

    #[tokio::test]
    async fn renders_are_recorded_per_library() {
        let overlays = Arc::new(InMemoryOverlayDom::new());
        let library = InMemoryWidgetLibrary::new(Arc::clone(&overlays));
        let init = WidgetInit::from_config(&WidgetConfig::default());

        let widget = library.cart(&init, options(false)).unwrap();
        let order = normalize(&RawCartSnapshot::empty_placeholder());
        widget.render(&order).await.unwrap();

        assert_eq!(library.renders().len(), 1);
        assert_eq!(library.constructions().len(), 1);
        assert_eq!(overlays.find_new_overlay(), None);
    }

    #[tokio::test]
    async fn popup_widgets_inject_an_overlay_per_render() {
        let overlays = Arc::new(InMemoryOverlayDom::new());
        let library = InMemoryWidgetLibrary::new(Arc::clone(&overlays));
        let init = WidgetInit::from_config(&WidgetConfig::default());

        let widget = library.cart(&init, options(true)).unwrap();
        let order = normalize(&RawCartSnapshot::empty_placeholder());
        widget.render(&order).await.unwrap();
        widget.render(&order).await.unwrap();

        assert!(overlays.find_new_overlay().is_some());
        assert!(overlays.find_new_overlay().is_some());
        assert!(overlays.find_new_overlay().is_none());
    }

    #[tokio::test]
    async fn loader_counts_requests() {
        let overlays = Arc::new(InMemoryOverlayDom::new());
        let library = Arc::new(InMemoryWidgetLibrary::new(overlays));
        let loader = InMemoryWidgetLoader::new(library);

        loader
            .ensure_loaded("https://cdn.cartwatch.example/widget/latest/bundle.js")
            .await
            .unwrap();
        loader
            .ensure_loaded("https://cdn.cartwatch.example/widget/latest/bundle.js")
            .await
            .unwrap();

        assert_eq!(loader.load_count(), 2);
        assert_eq!(loader.requested_urls().len(), 2);
    }
}
