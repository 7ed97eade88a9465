mod app;
mod components;
mod config;
mod containers;
mod host;
mod models;
mod pages;
mod routes;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(PortalRoot)]
fn portal_root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = FrontendConfig::new();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    log::info!("Starting UniPortal");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount into");
        return;
    };
    Renderer::<PortalRoot>::with_root(body.into()).render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn portal_root_renders_brand() {
        let rendered = yew::ServerRenderer::<PortalRoot>::new().render().await;
        assert!(rendered.contains("UniPortal"));
    }
}
