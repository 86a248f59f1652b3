use app_shell::{ChartError, ChartResult, ChartWidget, WidgetConfig, WidgetFactory};
use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{describe, document, LIBRARY_GLOBAL};

fn widget_err(err: JsValue) -> ChartError {
    ChartError::Widget(describe(&err))
}

/// Handle returned by `new TradingView.widget(..)`.
pub struct TradingViewWidget {
    handle: JsValue,
}

impl ChartWidget for TradingViewWidget {
    fn dispose(&mut self) -> ChartResult<()> {
        let remove = Reflect::get(&self.handle, &JsValue::from_str("remove")).map_err(widget_err)?;
        match remove.dyn_ref::<Function>() {
            Some(remove) => {
                remove.call0(&self.handle).map_err(widget_err)?;
            }
            // Nothing to call; the next clear_container wipes the markup.
            None => web_sys::console::debug_1(&JsValue::from_str("widget has no remove()")),
        }
        Ok(())
    }
}

/// Builds widgets from the page's `TradingView` global.
#[derive(Debug, Default, Clone, Copy)]
pub struct TradingViewFactory;

impl TradingViewFactory {
    fn constructor() -> ChartResult<Function> {
        let lib = Reflect::get(&js_sys::global(), &JsValue::from_str(LIBRARY_GLOBAL))
            .map_err(widget_err)?;
        if lib.is_undefined() || lib.is_null() {
            return Err(ChartError::Widget(format!("{LIBRARY_GLOBAL} is not defined")));
        }
        Reflect::get(&lib, &JsValue::from_str("widget"))
            .map_err(widget_err)?
            .dyn_into::<Function>()
            .map_err(|_| ChartError::Widget(format!("{LIBRARY_GLOBAL}.widget is not a constructor")))
    }
}

impl WidgetFactory for TradingViewFactory {
    type Widget = TradingViewWidget;

    fn clear_container(&self, container_id: &str) -> ChartResult<()> {
        let container = document()?
            .get_element_by_id(container_id)
            .ok_or_else(|| ChartError::Dom(format!("#{container_id} not found")))?;
        container.set_inner_html("");
        Ok(())
    }

    fn create(&self, config: &WidgetConfig) -> ChartResult<TradingViewWidget> {
        let ctor = Self::constructor()?;
        let options = JSON::parse(&config.to_json()?).map_err(widget_err)?;
        let handle = Reflect::construct(&ctor, &Array::of1(&options)).map_err(widget_err)?;
        Ok(TradingViewWidget { handle })
    }
}
