//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the embedding
//! environment. The runtime lives inside a page it does not own, so every
//! outward-facing capability — the network primitive, the cart endpoint, the
//! widget library, the page's DOM — is reached through one of these traits
//! and can be faked in tests.

pub mod cart_source;
pub mod delay;
pub mod http;
pub mod page;
pub mod widget;

pub use cart_source::{CartSourceError, CartSourcePort};
pub use delay::DelayPort;
pub use http::{HttpCallError, HttpCallPort, HttpMethod, HttpRequest, HttpResponse};
pub use page::{HostPagePort, OverlayDomPort};
pub use widget::{
    CartWidgetOptions, WidgetConstructError, WidgetInit, WidgetLibraryPort, WidgetLoaderPort,
    WidgetPort, WidgetRenderError,
};
