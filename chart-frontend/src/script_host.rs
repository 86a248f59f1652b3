use app_shell::{ChartError, ChartResult, Injection, ScriptHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlScriptElement};

use crate::{describe, document, global_defined, mark_library_ready, LIBRARY_GLOBAL, LOADER_ATTR};

type Listener = Closure<dyn FnMut(Event)>;

fn script_err(err: JsValue) -> ChartError {
    ChartError::Script(describe(&err))
}

/// `<script>` injection into `document.head`.
#[derive(Default)]
pub struct DomScriptHost {
    owned: Option<HtmlScriptElement>,
    listeners: Vec<(HtmlScriptElement, &'static str, Listener)>,
}

impl DomScriptHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn listen(&mut self, script: &HtmlScriptElement, kind: &'static str, cb: Listener) -> ChartResult<()> {
        script
            .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
            .map_err(script_err)?;
        self.listeners.push((script.clone(), kind, cb));
        Ok(())
    }

    fn detach_listeners(&mut self) {
        for (script, kind, cb) in self.listeners.drain(..) {
            let _ = script.remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
        }
    }

    fn pending_script(&self) -> ChartResult<Option<HtmlScriptElement>> {
        let found = document()?
            .query_selector(&format!("script[{LOADER_ATTR}]"))
            .map_err(script_err)?;
        Ok(found.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok()))
    }
}

impl ScriptHost for DomScriptHost {
    fn library_present(&self) -> bool {
        crate::library_ready() || global_defined(LIBRARY_GLOBAL)
    }

    fn inject(&mut self, src: &str, on_load: Box<dyn FnOnce()>) -> ChartResult<Injection> {
        let (script, injection) = match self.pending_script()? {
            Some(script) => (script, Injection::Joined),
            None => {
                let script = document()?
                    .create_element("script")
                    .map_err(script_err)?
                    .dyn_into::<HtmlScriptElement>()
                    .map_err(|_| ChartError::Script("not a script element".into()))?;
                script.set_src(src);
                script.set_async(true);
                script.set_attribute(LOADER_ATTR, "").map_err(script_err)?;
                (script, Injection::Created)
            }
        };

        let mut on_load = Some(on_load);
        self.listen(
            &script,
            "load",
            Closure::new(move |_: Event| {
                mark_library_ready();
                if let Some(cb) = on_load.take() {
                    cb();
                }
            }),
        )?;
        let failed_src = src.to_string();
        self.listen(
            &script,
            "error",
            Closure::new(move |_: Event| {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "charting library failed to load from {failed_src}"
                )));
            }),
        )?;

        if injection == Injection::Created {
            let head = document()?
                .head()
                .ok_or_else(|| ChartError::Dom("no <head>".into()))?;
            head.append_child(&script).map_err(script_err)?;
            self.owned = Some(script);
        }
        Ok(injection)
    }

    fn remove(&mut self) -> ChartResult<bool> {
        self.detach_listeners();
        let Some(script) = self.owned.take() else {
            return Ok(false);
        };
        match script.parent_node() {
            Some(parent) => {
                parent.remove_child(&script).map_err(script_err)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Drop for DomScriptHost {
    fn drop(&mut self) {
        self.detach_listeners();
    }
}
