//! Overlay history domain model.
//!
//! A widget render may inject a transient overlay element into the host page
//! as a side effect. The history records every overlay the runtime has
//! discovered, in order. Retirement marks records rather than removing them,
//! and neutralized elements stay in the page, so the list grows for the
//! lifetime of the page. That growth is a known, deliberate trait of the
//! reconciliation scheme: removing elements could disturb DOM identity the
//! widget library relies on.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Marker class the widget library stamps on overlay elements. Overlays are
/// never returned from a render call; they are discovered afterwards by this
/// marker.
pub const OVERLAY_MARKER_CLASS: &str = "cw-popup";

/// Opaque reference to an overlay element discovered in the host page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlayHandle(Uuid);

impl OverlayHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OverlayHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct OverlayRecord {
    pub handle: OverlayHandle,
    pub appended_at: DateTime<Utc>,
    pub retired_at: Option<DateTime<Utc>>,
}

impl OverlayRecord {
    pub fn is_live(&self) -> bool {
        self.retired_at.is_none()
    }
}

/// Ordered, append-only record of discovered overlays.
///
/// Invariant: at most one record is live, and it is always the most recently
/// appended one.
#[derive(Debug, Default)]
pub struct OverlayHistory {
    records: Vec<OverlayRecord>,
}

impl OverlayHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Handles of every record ever tracked, in discovery order.
    pub fn handles(&self) -> Vec<OverlayHandle> {
        self.records.iter().map(|r| r.handle.clone()).collect()
    }

    /// Handles of records not yet retired.
    pub fn live_handles(&self) -> Vec<OverlayHandle> {
        self.records
            .iter()
            .filter(|r| r.is_live())
            .map(|r| r.handle.clone())
            .collect()
    }

    /// Mark every record retired, returning the handles that were still live.
    pub fn retire_all(&mut self) -> Vec<OverlayHandle> {
        let now = Utc::now();
        let mut retired = Vec::new();
        for record in &mut self.records {
            if record.is_live() {
                record.retired_at = Some(now);
                retired.push(record.handle.clone());
            }
        }
        retired
    }

    /// Append a freshly discovered overlay as the sole live record.
    pub fn append(&mut self, handle: OverlayHandle) {
        self.records.push(OverlayRecord {
            handle,
            appended_at: Utc::now(),
            retired_at: None,
        });
    }

    pub fn newest(&self) -> Option<&OverlayRecord> {
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retire_on_empty_history_is_a_no_op() {
        let mut history = OverlayHistory::new();
        assert!(history.retire_all().is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn append_after_retire_leaves_one_live_record() {
        let mut history = OverlayHistory::new();
        history.append(OverlayHandle::new());
        history.retire_all();
        history.append(OverlayHandle::new());

        assert_eq!(history.len(), 2);
        assert_eq!(history.live_handles().len(), 1);
        assert!(history.newest().unwrap().is_live());
    }

    #[test]
    fn retired_records_are_kept() {
        let mut history = OverlayHistory::new();
        for _ in 0..5 {
            history.retire_all();
            history.append(OverlayHandle::new());
        }

        assert_eq!(history.len(), 5);
        assert_eq!(history.live_handles().len(), 1);
        assert_eq!(history.handles().len(), 5);
    }

    #[test]
    fn retire_all_reports_only_previously_live_handles() {
        let mut history = OverlayHistory::new();
        let first = OverlayHandle::new();
        history.append(first.clone());
        assert_eq!(history.retire_all(), vec![first]);
        // A second pass has nothing left to retire.
        assert!(history.retire_all().is_empty());
    }
}
