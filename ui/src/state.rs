use std::rc::Rc;

use app_shell::ChartSettings;
use leptos::*;

#[cfg(target_arch = "wasm32")]
use leptos::logging::warn;

#[derive(Clone)]
pub struct ChartCtx {
    pub settings: Rc<ChartSettings>,
}

/// Defaults, overlaid with the page's `CRYPTOCHART_CONFIG` when present.
pub fn resolve_settings() -> ChartSettings {
    #[cfg(target_arch = "wasm32")]
    {
        match chart_frontend::settings_from_page() {
            Ok(Some(settings)) => settings,
            Ok(None) => ChartSettings::default(),
            Err(err) => {
                warn!(
                    "ignoring {}: {err}",
                    chart_frontend::SETTINGS_GLOBAL
                );
                ChartSettings::default()
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ChartSettings::default()
    }
}

pub fn provide_chart_ctx(settings: ChartSettings) -> ChartCtx {
    let ctx = ChartCtx {
        settings: Rc::new(settings),
    };
    provide_context(ctx.clone());
    ctx
}

/// Falls back to default settings when no provider is above the caller.
pub fn use_chart_ctx() -> ChartCtx {
    use_context::<ChartCtx>().unwrap_or_else(|| ChartCtx {
        settings: Rc::new(ChartSettings::default()),
    })
}
