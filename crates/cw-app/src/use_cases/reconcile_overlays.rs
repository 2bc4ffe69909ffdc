//! Overlay reconciliation after a widget render.
//!
//! A render may leave a fresh overlay element in the host page. Each cycle
//! first neutralizes every overlay the history has ever tracked, then
//! discovers the newly injected one by its marker class, reparents it to the
//! body root and appends it to the history. Neutralizing the whole history
//! rather than only live records keeps the cycle idempotent when an earlier
//! neutralization was interrupted.

use std::sync::{Arc, Mutex};

use tracing::debug;

use cw_core::overlay::OverlayHistory;
use cw_core::ports::OverlayDomPort;

#[derive(Clone)]
pub struct ReconcileOverlays {
    dom: Arc<dyn OverlayDomPort>,
    history: Arc<Mutex<OverlayHistory>>,
    enabled: bool,
}

impl ReconcileOverlays {
    pub fn new(
        dom: Arc<dyn OverlayDomPort>,
        history: Arc<Mutex<OverlayHistory>>,
        enabled: bool,
    ) -> Self {
        Self {
            dom,
            history,
            enabled,
        }
    }

    /// Runs one reconciliation cycle. A no-op when the overlay feature is
    /// not enabled.
    pub fn execute(&self) {
        if !self.enabled {
            return;
        }

        let mut history = match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        for handle in history.handles() {
            self.dom.neutralize(&handle);
        }
        history.retire_all();

        if let Some(handle) = self.dom.find_new_overlay() {
            self.dom.move_to_root(&handle);
            history.append(handle);
            debug!(tracked = history.len(), "overlay discovered and adopted");
        }
    }
}
