//! Page bootstrap.
//!
//! Runs once per page: read the widget configuration off the embed script's
//! query string, insert the container, load the widget bundle, construct the
//! widget, run the initial refresh, and hand back an observed network client
//! for the embedding layer to install in place of the page's own primitive.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use cw_app::{ObservedHttpClient, WidgetRuntime};
use cw_core::cart::{normalize, RawCartSnapshot};
use cw_core::config::{IntegrationMode, WidgetConfig};
use cw_core::ports::{
    CartWidgetOptions, DelayPort, HostPagePort, HttpCallPort, OverlayDomPort, WidgetInit,
    WidgetLoaderPort, WidgetPort,
};
use cw_infra::{embed_query_pairs, HttpCartSource};

/// Hostname fragment that marks a development storefront.
pub const DEV_STORE_MARKER: &str = "cartwatch-development-store";

pub const LATEST_BUNDLE_URL: &str = "https://cdn.cartwatch.example/widget/latest/bundle.min.js";

/// Pinned build served to development storefronts.
pub const DEV_BUNDLE_URL: &str = "https://cdn.cartwatch.example/widget/v2.9.4/bundle.min.js";

/// Widget bundle for the given page hostname. Development storefronts get
/// the pinned build instead of the latest release.
pub fn bundle_url_for(hostname: &str) -> &'static str {
    if hostname.contains(DEV_STORE_MARKER) {
        DEV_BUNDLE_URL
    } else {
        LATEST_BUNDLE_URL
    }
}

/// Everything the embedding layer provides to bootstrap the widget.
pub struct BootstrapDeps {
    pub page: Arc<dyn HostPagePort>,
    pub overlay_dom: Arc<dyn OverlayDomPort>,
    pub loader: Arc<dyn WidgetLoaderPort>,
    pub delay: Arc<dyn DelayPort>,
    /// The page's network primitive. Absent on pages that expose none, in
    /// which case the widget renders once and never refreshes.
    pub http: Option<Arc<dyn HttpCallPort>>,
}

/// Result of a completed bootstrap.
pub struct BootstrapHandle {
    config: WidgetConfig,
    widget: Arc<dyn WidgetPort>,
    runtime: Option<WidgetRuntime>,
    observed: Option<Arc<ObservedHttpClient>>,
}

impl BootstrapHandle {
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn widget(&self) -> Arc<dyn WidgetPort> {
        Arc::clone(&self.widget)
    }

    pub fn runtime(&self) -> Option<&WidgetRuntime> {
        self.runtime.as_ref()
    }

    /// The decorated network primitive. The embedding layer must swap this
    /// in for the page's own primitive so cart mutations are observed.
    pub fn observed_client(&self) -> Option<Arc<ObservedHttpClient>> {
        self.observed.clone()
    }
}

pub struct Bootstrap {
    deps: BootstrapDeps,
    installed: OnceCell<Arc<BootstrapHandle>>,
}

impl Bootstrap {
    pub fn new(deps: BootstrapDeps) -> Self {
        Self {
            deps,
            installed: OnceCell::new(),
        }
    }

    /// Bootstraps the widget, or returns the handle from an earlier run.
    /// The embed script can be included twice; only the first run installs
    /// anything.
    pub async fn run(&self) -> anyhow::Result<Arc<BootstrapHandle>> {
        if let Some(existing) = self.installed.get() {
            return Ok(Arc::clone(existing));
        }

        let handle = Arc::new(self.install().await?);
        let stored = self.installed.get_or_init(|| handle);
        Ok(Arc::clone(stored))
    }

    async fn install(&self) -> anyhow::Result<BootstrapHandle> {
        let page = &self.deps.page;

        let pairs = match page.embed_script_src() {
            Some(src) => embed_query_pairs(&src).unwrap_or_else(|e| {
                warn!(error = %e, "embed script src unparseable, using defaults");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let integration = if page.design_mode() {
            IntegrationMode::Preview
        } else {
            IntegrationMode::Production {
                shop: page.shop_identifier(),
            }
        };
        let config = WidgetConfig::from_query_pairs(&pairs, &page.locale_hint(), integration);

        if !page.ensure_widget_container() {
            warn!("no insertion point for the widget container");
        }

        let bundle_url = bundle_url_for(&page.hostname());
        let library = self
            .deps
            .loader
            .ensure_loaded(bundle_url)
            .await
            .context("widget bundle failed to load")?;

        let init = WidgetInit::from_config(&config);
        let placeholder = normalize(&RawCartSnapshot::empty_placeholder());
        let options = CartWidgetOptions::from_config(&config, placeholder);
        let widget = library
            .cart(&init, options)
            .map_err(|e| anyhow!("widget construction failed: {e}"))?;

        let (runtime, observed) = match &self.deps.http {
            Some(http) => {
                let origin = page.origin();
                let cart_source = Arc::new(HttpCartSource::new(Arc::clone(http), origin.clone()));
                let runtime = WidgetRuntime::builder()
                    .with_cart_source(cart_source)
                    .with_widget(Arc::clone(&widget))
                    .with_overlay_dom(Arc::clone(&self.deps.overlay_dom))
                    .with_delay(Arc::clone(&self.deps.delay))
                    .with_origin(origin)
                    .with_popup(config.with_popup)
                    .build()?;

                runtime.refresh_and_log().await;
                let observed = runtime.observe(Arc::clone(http));
                (Some(runtime), Some(observed))
            }
            None => {
                warn!("page exposes no network primitive, cart changes will not be observed");
                (None, None)
            }
        };

        info!(
            integration = %config.integration.slug(),
            locale = config.locale.as_str(),
            popup = config.with_popup,
            "widget bootstrap complete"
        );

        Ok(BootstrapHandle {
            config,
            widget,
            runtime,
            observed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_store_hostnames_get_the_dev_bundle() {
        assert_eq!(
            bundle_url_for("cartwatch-development-store.example.com"),
            DEV_BUNDLE_URL
        );
        assert_eq!(bundle_url_for("my-shop.example.com"), LATEST_BUNDLE_URL);
    }
}
