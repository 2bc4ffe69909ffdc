pub mod reconcile_overlays;
pub mod refresh_widget;

pub use reconcile_overlays::ReconcileOverlays;
pub use refresh_widget::{RefreshError, RefreshOutcome, RefreshWidget};
