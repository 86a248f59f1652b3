use crate::{
    chart::CryptoChart,
    state::{provide_chart_ctx, resolve_settings},
    theme::GLOBAL_CSS,
};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_chart_ctx(resolve_settings());

    view! {
        <Title text="Crypto Chart"/>
        <Style>{GLOBAL_CSS}</Style>
        <main class="page">
            <CryptoChart/>
        </main>
    }
}
