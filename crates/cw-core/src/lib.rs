//! # cw-core
//!
//! Core domain models and port contracts for the cartwatch runtime.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod cart;
pub mod config;
pub mod overlay;
pub mod ports;

// Re-export commonly used types at the crate root
pub use cart::{normalize, LineItem, NormalizedOrder, ProductId, RawCartSnapshot, RawLineItem};
pub use config::{IntegrationMode, Locale, WidgetConfig};
pub use overlay::{OverlayHandle, OverlayHistory, OverlayRecord};
