//! Adapters for the application ports: the real network stack, the cart
//! endpoint, timing, and in-memory stand-ins for the host page used by
//! tests and headless embeddings.

pub mod cart_source;
pub mod delay;
pub mod http_client;
pub mod memory_page;
pub mod memory_widget;
pub mod script_url;

pub use cart_source::{HttpCartSource, CART_DATA_PATH};
pub use delay::TokioDelay;
pub use http_client::ReqwestHttpCall;
pub use memory_page::{InMemoryHostPage, InMemoryOverlayDom, PageProfile};
pub use memory_widget::{InMemoryWidgetLibrary, InMemoryWidgetLoader};
pub use script_url::embed_query_pairs;
