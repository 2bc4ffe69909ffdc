//! Widget configuration surface.
//!
//! Read once at bootstrap from the embed script's query string plus host page
//! facts. Defaults mirror the production embed.

use serde::{Deserialize, Serialize};

/// Marker attribute of the widget container placeholder.
pub const WIDGET_CONTAINER_MARKER: &str = "data-cartwatch-widget-target";

/// Selector form of [`WIDGET_CONTAINER_MARKER`], as passed to the widget
/// library.
pub const WIDGET_CONTAINER_SELECTOR: &str = "[data-cartwatch-widget-target]";

/// Integration identifier reported for theme-editor preview sessions.
pub const PREVIEW_SLUG: &str = "CW_PREVIEW";

/// Locales the widget library ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
}

impl Locale {
    /// Map a host locale hint onto the supported set, falling back to
    /// English.
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

/// Distinguishes theme-editor preview sessions from live storefronts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationMode {
    Preview,
    Production { shop: String },
}

impl IntegrationMode {
    /// Integration identifier handed to the widget library.
    pub fn slug(&self) -> &str {
        match self {
            IntegrationMode::Preview => PREVIEW_SLUG,
            IntegrationMode::Production { shop } => shop,
        }
    }

    pub fn is_shop_integration(&self) -> bool {
        matches!(self, IntegrationMode::Production { .. })
    }
}

/// Configuration the widget instance is constructed with, fixed for the
/// lifetime of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub color: String,
    pub widget_style: String,
    /// Overlay feature toggle. Opt-in: only the exact query value
    /// `withPopup=1` enables it.
    pub with_popup: bool,
    pub popup_theme: String,
    pub locale: Locale,
    pub integration: IntegrationMode,
    pub version: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            color: "green".to_string(),
            widget_style: "default".to_string(),
            with_popup: false,
            popup_theme: "light".to_string(),
            locale: Locale::En,
            integration: IntegrationMode::Preview,
            version: "v2".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build the config from embed-script query pairs and host facts.
    /// Unknown keys are ignored.
    pub fn from_query_pairs(
        pairs: &[(String, String)],
        locale_hint: &str,
        integration: IntegrationMode,
    ) -> Self {
        let mut config = Self {
            locale: Locale::from_hint(locale_hint),
            integration,
            ..Self::default()
        };

        for (key, value) in pairs {
            match key.as_str() {
                "color" => config.color = value.clone(),
                "widgetStyle" => config.widget_style = value.clone(),
                "withPopup" => config.with_popup = value == "1",
                _ => {}
            }
        }

        config
    }
}
