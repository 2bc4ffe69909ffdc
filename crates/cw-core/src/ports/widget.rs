//! Widget library ports.
//!
//! The widget library is an external bundle the runtime loads at bootstrap.
//! Three seams: loading the bundle, constructing a cart widget from it, and
//! rendering an order into a constructed widget.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::cart::NormalizedOrder;
use crate::config::{Locale, WidgetConfig, WIDGET_CONTAINER_SELECTOR};

/// Options a cart widget is constructed with. Mirrors the widget library's
/// cart entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct CartWidgetOptions {
    pub color: String,
    pub container_selector: String,
    pub use_shadow_dom: bool,
    pub style: String,
    pub with_popup: bool,
    pub popup_theme: String,
    pub order: NormalizedOrder,
    pub version: String,
}

impl CartWidgetOptions {
    pub fn from_config(config: &WidgetConfig, order: NormalizedOrder) -> Self {
        Self {
            color: config.color.clone(),
            container_selector: WIDGET_CONTAINER_SELECTOR.to_string(),
            use_shadow_dom: false,
            style: config.widget_style.clone(),
            with_popup: config.with_popup,
            popup_theme: config.popup_theme.clone(),
            order,
            version: config.version.clone(),
        }
    }
}

/// Session-level facts the widget library is initialized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetInit {
    pub locale: Locale,
    pub integration_slug: String,
    pub is_shop_integration: bool,
}

impl WidgetInit {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            locale: config.locale,
            integration_slug: config.integration.slug().to_string(),
            is_shop_integration: config.integration.is_shop_integration(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WidgetRenderError {
    #[error("widget library rejected the render: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum WidgetConstructError {
    #[error("widget construction failed: {0}")]
    Failed(String),
}

/// A constructed cart widget. Rendering replaces the widget's contents with
/// the given order and may inject an overlay into the host page.
#[async_trait]
pub trait WidgetPort: Send + Sync {
    async fn render(&self, order: &NormalizedOrder) -> Result<(), WidgetRenderError>;
}

/// The loaded widget library.
pub trait WidgetLibraryPort: Send + Sync {
    fn cart(
        &self,
        init: &WidgetInit,
        options: CartWidgetOptions,
    ) -> Result<Arc<dyn WidgetPort>, WidgetConstructError>;
}

/// Fetches and evaluates the widget bundle. Loading twice returns the
/// already-initialized library.
#[async_trait]
pub trait WidgetLoaderPort: Send + Sync {
    async fn ensure_loaded(&self, bundle_url: &str) -> anyhow::Result<Arc<dyn WidgetLibraryPort>>;
}
