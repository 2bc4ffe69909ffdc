use serde::{Deserialize, Serialize};

/// Point-in-time cart state as served by the host page's cart endpoint.
///
/// Field names mirror the endpoint's JSON. The host page owns this state;
/// the runtime only ever reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCartSnapshot {
    pub items: Vec<RawLineItem>,
    pub currency: String,
    pub total_price: f64,
}

impl RawCartSnapshot {
    /// Placeholder used for the initial widget construction, before the
    /// first fetch of the real cart.
    pub fn empty_placeholder() -> Self {
        Self {
            items: Vec::new(),
            currency: "GBP".to_string(),
            total_price: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Product ids arrive as either a JSON number or a JSON string depending on
/// the host platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Text(String),
    Numeric(i64),
}

impl ProductId {
    /// Canonical string form, regardless of the wire representation.
    pub fn as_canonical_string(&self) -> String {
        match self {
            ProductId::Text(s) => s.clone(),
            ProductId::Numeric(n) => n.to_string(),
        }
    }
}

/// The widget's order contract. Serializes camelCase, as the widget library
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOrder {
    pub line_items: Vec<LineItem>,
    pub currency: String,
    pub total_price: f64,
}

impl NormalizedOrder {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
}
