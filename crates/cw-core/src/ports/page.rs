//! Host page ports.
//!
//! The runtime is a guest inside a storefront page it does not control.
//! `HostPagePort` exposes the page facts bootstrap needs; `OverlayDomPort`
//! covers the small set of element operations overlay reconciliation
//! performs.

use crate::overlay::OverlayHandle;

pub trait HostPagePort: Send + Sync {
    /// Origin of the page, scheme and host, no trailing slash.
    fn origin(&self) -> String;

    fn hostname(&self) -> String;

    /// `src` attribute of the embed script tag, if it can be located.
    fn embed_script_src(&self) -> Option<String>;

    /// Page language hint, e.g. `"de"`.
    fn locale_hint(&self) -> String;

    /// True inside the theme editor preview.
    fn design_mode(&self) -> bool;

    /// Permanent shop identifier reported by the host platform.
    fn shop_identifier(&self) -> String;

    /// Insert the widget container placeholder near the cart footer if it is
    /// not already present. Returns false when no insertion point exists.
    fn ensure_widget_container(&self) -> bool;
}

/// DOM-level operations on overlay elements.
pub trait OverlayDomPort: Send + Sync {
    /// Scan the page for an overlay element carrying
    /// [`crate::overlay::OVERLAY_MARKER_CLASS`] that the runtime has not
    /// handed out a handle for yet.
    fn find_new_overlay(&self) -> Option<OverlayHandle>;

    /// Strip the overlay's identifying attributes and hide it. Idempotent;
    /// the element stays in the page.
    fn neutralize(&self, handle: &OverlayHandle);

    /// Reparent the overlay to the page body root so container styling
    /// cannot clip it.
    fn move_to_root(&self, handle: &OverlayHandle);

    fn is_visible(&self, handle: &OverlayHandle) -> bool;
}
