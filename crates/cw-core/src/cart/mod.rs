//! Cart domain model: raw snapshots, the widget order contract, and the
//! mutation endpoint set.

mod endpoints;
mod normalize;
mod snapshot;

pub use endpoints::{is_cart_mutation_url, mutation_endpoints, CART_MUTATION_PATHS};
pub use normalize::normalize;
pub use snapshot::{LineItem, NormalizedOrder, ProductId, RawCartSnapshot, RawLineItem};
