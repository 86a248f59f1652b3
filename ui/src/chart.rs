use crate::state::use_chart_ctx;
use app_shell::{Preset, SelectionState, PRESETS};
use leptos::*;

#[cfg(target_arch = "wasm32")]
use app_shell::{LoadState, ScriptLoader, SyncOutcome, WidgetLifecycle};
#[cfg(target_arch = "wasm32")]
use chart_frontend::{DomScriptHost, TradingViewFactory};
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use leptos::logging::{error, log, warn};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

/// Symbol picker plus a TradingView chart for the picked symbol.
#[component]
pub fn CryptoChart() -> impl IntoView {
    let settings = use_chart_ctx().settings;
    let selection = create_rw_signal(SelectionState::new(settings.default_symbol.clone()));
    // Typing in the search box must not rebuild the widget.
    let symbol = create_memo(move |_| selection.with(|s| s.symbol().clone()));
    let (script_loaded, set_script_loaded) = create_signal(false);
    let (container_ready, set_container_ready) = create_signal(false);
    let container = create_node_ref::<html::Div>();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&script_loaded, &set_script_loaded, &container_ready, &set_container_ready);

    #[cfg(target_arch = "wasm32")]
    {
        let loader = Rc::new(RefCell::new(ScriptLoader::new(
            DomScriptHost::new(),
            settings.script_url.clone(),
        )));
        let mounted = loader.borrow_mut().mount(move || {
            let _ = set_script_loaded.try_set(true);
        });
        match mounted {
            Ok(LoadState::Ready) => set_script_loaded.set(true),
            Ok(state) => log!("charting script {state:?}: {}", settings.script_url),
            Err(err) => error!("could not add charting script: {err}"),
        }

        // The library looks the container up by id, so wait until it is in the document.
        container.on_load(move |_| {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                let _ = set_container_ready.try_set(true);
            });
        });

        let lifecycle = Rc::new(RefCell::new(WidgetLifecycle::new(
            TradingViewFactory,
            settings.container_id.clone(),
            settings.widget.clone(),
        )));

        {
            let lifecycle = Rc::clone(&lifecycle);
            create_effect(move |_| {
                let ready = script_loaded.get();
                let symbol = symbol.get();
                let outcome = lifecycle
                    .borrow_mut()
                    .sync(ready, &symbol, container_ready.get());
                match outcome {
                    Ok(SyncOutcome::Created { symbol, replaced }) => {
                        log!("chart widget for {symbol} (replaced previous: {replaced})");
                    }
                    Ok(_) => {}
                    Err(err) => error!("chart widget for {symbol} failed: {err}"),
                }
            });
        }

        on_cleanup(move || {
            if let Err(err) = lifecycle.borrow_mut().teardown() {
                warn!("chart widget teardown: {err}");
            }
            if let Err(err) = loader.borrow_mut().unmount() {
                warn!("charting script removal: {err}");
            }
        });
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        selection.update(|s| {
            s.submit_search();
        });
    };

    let height = format!("height: {}px;", settings.chart_height_px);
    let container_id = settings.container_id.clone();

    view! {
        <div class="panel crypto-chart">
            <div class="chart-header">
                <div class="chart-meta">
                    <div class="flex-row">
                        <h2 class="chart-title">{move || symbol.get().to_string()}</h2>
                        <span class="text-muted">{move || selection.with(|s| s.display_name())}</span>
                    </div>
                    <form class="flex-row search-form" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Enter crypto symbol"
                            aria-label="Crypto symbol"
                            prop:value=move || selection.with(|s| s.search_text().to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                selection.update(|s| s.set_search_text(text));
                            }
                        />
                        <button type="submit" class="btn-primary">"Search"</button>
                    </form>
                </div>
                <div class="preset-row">
                    {PRESETS
                        .iter()
                        .map(|preset| view! { <PresetButton preset=*preset selection=selection/> })
                        .collect_view()}
                </div>
            </div>
            <div class="chart-surface" style=height>
                <div node_ref=container id=container_id class="chart-container"></div>
            </div>
        </div>
    }
}

#[component]
fn PresetButton(preset: Preset, selection: RwSignal<SelectionState>) -> impl IntoView {
    let active = move || selection.with(|s| s.is_active(&preset));
    view! {
        <button
            type="button"
            class="chip"
            class:active=active
            on:click=move |_| selection.update(|s| s.select_preset(&preset))
        >
            {preset.name}
        </button>
    }
}
