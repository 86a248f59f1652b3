use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::symbol::Symbol;

pub const DEFAULT_SCRIPT_URL: &str = "https://s3.tradingview.com/tv.js";
pub const DEFAULT_CONTAINER_ID: &str = "tradingview-chart";
pub const DEFAULT_SYMBOL: &str = "BTCUSD";
pub const DEFAULT_CHART_HEIGHT_PX: u32 = 500;

/// Page-level settings for the chart component. Every field falls back to
/// its default, so an override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub script_url: String,
    pub container_id: String,
    pub default_symbol: Symbol,
    pub chart_height_px: u32,
    pub widget: WidgetOptions,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            default_symbol: Symbol::from_static(DEFAULT_SYMBOL),
            chart_height_px: DEFAULT_CHART_HEIGHT_PX,
            widget: WidgetOptions::default(),
        }
    }
}

impl ChartSettings {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Presentation options forwarded to the external widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub toolbar_bg: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            interval: "1D".into(),
            timezone: "Etc/UTC".into(),
            theme: "light".into(),
            style: "1".into(),
            locale: "en".into(),
            toolbar_bg: "#f1f3f6".into(),
        }
    }
}

/// Constructor argument for the external widget. Field names match what the
/// charting library expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetConfig {
    pub autosize: bool,
    pub symbol: String,
    pub container_id: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub toolbar_bg: String,
    pub enable_publishing: bool,
    pub hide_top_toolbar: bool,
    pub hide_legend: bool,
    pub save_image: bool,
}

impl WidgetConfig {
    pub fn new(symbol: &Symbol, container_id: &str, options: &WidgetOptions) -> Self {
        Self {
            autosize: true,
            symbol: symbol.to_string(),
            container_id: container_id.to_string(),
            interval: options.interval.clone(),
            timezone: options.timezone.clone(),
            theme: options.theme.clone(),
            style: options.style.clone(),
            locale: options.locale.clone(),
            toolbar_bg: options.toolbar_bg.clone(),
            enable_publishing: false,
            hide_top_toolbar: false,
            hide_legend: false,
            save_image: false,
        }
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
