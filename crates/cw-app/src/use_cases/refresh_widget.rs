//! The widget refresh cycle.
//!
//! Fetch the cart, normalize it, and re-render the widget. An empty cart
//! aborts the cycle before any render. After a successful render the overlay
//! reconciler runs, because rendering is what injects new overlays.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info_span, Instrument};

use cw_core::cart::normalize;
use cw_core::ports::{CartSourceError, CartSourcePort, WidgetPort, WidgetRenderError};

use crate::use_cases::ReconcileOverlays;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("cart fetch failed: {0}")]
    Fetch(#[from] CartSourceError),

    #[error("widget render failed: {0}")]
    Render(#[from] WidgetRenderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The widget was re-rendered with the current cart.
    Rendered,
    /// The cart held no items; the widget was left untouched.
    EmptyCart,
}

pub struct RefreshWidget {
    cart_source: Arc<dyn CartSourcePort>,
    widget: Arc<dyn WidgetPort>,
    reconciler: ReconcileOverlays,
}

impl RefreshWidget {
    pub fn new(
        cart_source: Arc<dyn CartSourcePort>,
        widget: Arc<dyn WidgetPort>,
        reconciler: ReconcileOverlays,
    ) -> Self {
        Self {
            cart_source,
            widget,
            reconciler,
        }
    }

    pub async fn execute(&self) -> Result<RefreshOutcome, RefreshError> {
        let span = info_span!("usecase.refresh_widget.execute");
        async {
            let snapshot = self.cart_source.fetch_cart().await?;
            let order = normalize(&snapshot);
            if order.is_empty() {
                return Ok(RefreshOutcome::EmptyCart);
            }

            self.widget.render(&order).await?;
            self.reconciler.execute();
            Ok(RefreshOutcome::Rendered)
        }
        .instrument(span)
        .await
    }

    /// Boundary entry point for scheduled refreshes. A storefront page must
    /// keep working when the widget cannot, so failures are logged and
    /// swallowed here.
    pub async fn run(&self) {
        if let Err(e) = self.execute().await {
            error!(error = %e, "widget refresh cycle aborted");
        }
    }
}
