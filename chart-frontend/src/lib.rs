//! Browser side of the chart component: puts the TradingView script on the
//! page and drives `TradingView.widget` instances through `js-sys`.

use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
mod script_host;
#[cfg(target_arch = "wasm32")]
mod tradingview;

#[cfg(target_arch = "wasm32")]
pub use script_host::DomScriptHost;
#[cfg(target_arch = "wasm32")]
pub use tradingview::{TradingViewFactory, TradingViewWidget};

#[cfg(target_arch = "wasm32")]
use app_shell::{ChartError, ChartResult, ChartSettings};
#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Document};

/// Global the library defines once `tv.js` has run.
pub const LIBRARY_GLOBAL: &str = "TradingView";

/// Marks the script element this crate adds, so later loaders can find it.
pub const LOADER_ATTR: &str = "data-cryptochart-loader";

/// Page global holding a JSON settings override.
pub const SETTINGS_GLOBAL: &str = "CRYPTOCHART_CONFIG";

thread_local! {
    static LIBRARY_READY: Cell<bool> = const { Cell::new(false) };
}

/// Page-wide: true once any loader saw the script finish loading.
pub fn library_ready() -> bool {
    LIBRARY_READY.with(Cell::get)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn mark_library_ready() {
    LIBRARY_READY.with(|flag| flag.set(true));
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn document() -> ChartResult<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChartError::Dom("no document".into()))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn global_defined(key: &str) -> bool {
    read_global(key).is_some()
}

/// Reads the settings override from `globalThis.CRYPTOCHART_CONFIG`, which
/// may be a JSON string or a plain object. `Ok(None)` when it is not set.
#[cfg(target_arch = "wasm32")]
pub fn settings_from_page() -> ChartResult<Option<ChartSettings>> {
    let Some(value) = read_global(SETTINGS_GLOBAL) else {
        return Ok(None);
    };
    let json = match value.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(&value)
            .map_err(|e| ChartError::Dom(describe(&e)))?
            .as_string()
            .unwrap_or_default(),
    };
    ChartSettings::from_json(&json).map(Some)
}
