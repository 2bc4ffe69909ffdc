//! Cartwatch: a cart widget runtime for storefront pages.
//!
//! The crate is split the hexagonal way: `cw-core` holds the domain model
//! and port traits, `cw-app` the use cases and the observed network client,
//! `cw-infra` the adapters. This crate ties them together behind the page
//! bootstrap.

pub mod bootstrap;

pub use bootstrap::{
    bundle_url_for, Bootstrap, BootstrapDeps, BootstrapHandle, DEV_BUNDLE_URL, DEV_STORE_MARKER,
    LATEST_BUNDLE_URL,
};

pub use cw_app::{
    ObservedHttpClient, RefreshError, RefreshOutcome, WidgetRuntime, WidgetRuntimeBuilder,
    REFRESH_DELAY,
};
pub use cw_core::{cart, config, overlay, ports};

/// Installs the diagnostic subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_diagnostics() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
