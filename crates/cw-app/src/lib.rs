//! Application layer: use cases and the runtime that wires them together.

pub mod builder;
pub mod observed_client;
pub mod use_cases;

pub use builder::{WidgetRuntime, WidgetRuntimeBuilder};
pub use observed_client::{ObservedHttpClient, REFRESH_DELAY};
pub use use_cases::{ReconcileOverlays, RefreshError, RefreshOutcome, RefreshWidget};
