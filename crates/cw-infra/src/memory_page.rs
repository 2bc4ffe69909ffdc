//! In-memory host page adapters.
//!
//! Stand-ins for the real page used by tests and headless embeddings, in the
//! same spirit as an in-memory repository: full port semantics, no DOM.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use cw_core::overlay::OverlayHandle;
use cw_core::ports::{HostPagePort, OverlayDomPort};

/// Facts about the page the embed script landed in.
#[derive(Debug, Clone)]
pub struct PageProfile {
    pub origin: String,
    pub hostname: String,
    pub embed_script_src: Option<String>,
    pub locale_hint: String,
    pub design_mode: bool,
    pub shop_identifier: String,
    /// Whether the page has a cart footer the widget container can be
    /// inserted next to.
    pub has_cart_footer: bool,
}

impl Default for PageProfile {
    fn default() -> Self {
        Self {
            origin: "https://demo-shop.example.com".to_string(),
            hostname: "demo-shop.example.com".to_string(),
            embed_script_src: None,
            locale_hint: "en".to_string(),
            design_mode: false,
            shop_identifier: "demo-shop.example.com".to_string(),
            has_cart_footer: true,
        }
    }
}

pub struct InMemoryHostPage {
    profile: PageProfile,
    container_inserted: AtomicBool,
}

impl InMemoryHostPage {
    pub fn new(profile: PageProfile) -> Self {
        Self {
            profile,
            container_inserted: AtomicBool::new(false),
        }
    }

    pub fn container_inserted(&self) -> bool {
        self.container_inserted.load(Ordering::SeqCst)
    }
}

impl HostPagePort for InMemoryHostPage {
    fn origin(&self) -> String {
        self.profile.origin.clone()
    }

    fn hostname(&self) -> String {
        self.profile.hostname.clone()
    }

    fn embed_script_src(&self) -> Option<String> {
        self.profile.embed_script_src.clone()
    }

    fn locale_hint(&self) -> String {
        self.profile.locale_hint.clone()
    }

    fn design_mode(&self) -> bool {
        self.profile.design_mode
    }

    fn shop_identifier(&self) -> String {
        self.profile.shop_identifier.clone()
    }

    fn ensure_widget_container(&self) -> bool {
        if self.container_inserted.load(Ordering::SeqCst) {
            return true;
        }
        if !self.profile.has_cart_footer {
            return false;
        }
        self.container_inserted.store(true, Ordering::SeqCst);
        true
    }
}

/// Overlay surface of the in-memory page. Widgets inject overlays here and
/// the reconciler discovers them through the port.
#[derive(Default)]
pub struct InMemoryOverlayDom {
    pending: Mutex<Vec<OverlayHandle>>,
    moved: Mutex<Vec<OverlayHandle>>,
    neutralized: Mutex<Vec<OverlayHandle>>,
}

impl InMemoryOverlayDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the widget library injecting a fresh overlay element.
    pub fn inject(&self) -> OverlayHandle {
        let handle = OverlayHandle::new();
        self.lock(&self.pending).push(handle.clone());
        handle
    }

    pub fn visible_count(&self) -> usize {
        let moved = self.lock(&self.moved);
        let neutralized = self.lock(&self.neutralized);
        moved.iter().filter(|h| !neutralized.contains(h)).count()
    }

    pub fn neutralized_count(&self) -> usize {
        self.lock(&self.neutralized).len()
    }

    fn lock<'a>(
        &self,
        list: &'a Mutex<Vec<OverlayHandle>>,
    ) -> std::sync::MutexGuard<'a, Vec<OverlayHandle>> {
        match list.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl OverlayDomPort for InMemoryOverlayDom {
    fn find_new_overlay(&self) -> Option<OverlayHandle> {
        self.lock(&self.pending).pop()
    }

    fn neutralize(&self, handle: &OverlayHandle) {
        self.lock(&self.neutralized).push(handle.clone());
    }

    fn move_to_root(&self, handle: &OverlayHandle) {
        self.lock(&self.moved).push(handle.clone());
    }

    fn is_visible(&self, handle: &OverlayHandle) -> bool {
        let moved = self.lock(&self.moved);
        let neutralized = self.lock(&self.neutralized);
        moved.contains(handle) && !neutralized.contains(handle)
    }
}
