use crate::app::use_portal;
use shared::content::LocateStatus;
use shared::content::locate::MARKERS;
use shared::models::Page;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Asks the browser for a position fix. The status moves to `Locating` and
/// settles on `Found` or `Denied` when the host answers. Without a
/// geolocation API the status is left unchanged.
fn locate(status: &UseStateHandle<LocateStatus>) {
    let Some(geolocation) = web_sys::window().and_then(|window| window.navigator().geolocation().ok())
    else {
        log::warn!("Geolocation is not supported by this browser");
        return;
    };

    status.set(LocateStatus::Locating);
    let on_success = {
        let status = status.clone();
        Closure::once_into_js(move |_position: wasm_bindgen::JsValue| {
            status.set(LocateStatus::resolve(true));
        })
    };
    let on_error = {
        let status = status.clone();
        Closure::once_into_js(move |_error: wasm_bindgen::JsValue| {
            status.set(LocateStatus::resolve(false));
        })
    };

    if let Err(error) = geolocation
        .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
    {
        log::warn!("Position request failed: {error:?}");
        status.set(LocateStatus::resolve(false));
    }
}

/// Campus map page component
#[function_component(MapPage)]
pub fn map_page() -> Html {
    let status = use_state(LocateStatus::default);
    let Some(portal) = use_portal() else {
        return html! {};
    };

    let on_find = {
        let status = status.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            locate(&status);
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{ Page::Map.title() }</h1>
                <button
                    class="btn btn-primary btn-sm"
                    disabled={*status == LocateStatus::Locating}
                    onclick={on_find}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                    { status.label() }
                </button>
            </div>

            <div class="relative h-[500px] rounded-lg bg-base-300 flex items-center justify-center overflow-hidden">
                <div class="text-center text-base-content/60">
                    <Icon icon_id={IconId::HeroiconsOutlineMap} class="w-12 h-12 mx-auto mb-2" />
                    <div class="font-semibold">{ "Interactive Map Placeholder" }</div>
                    <div class="text-sm">{ "Pinch to zoom" }</div>
                </div>
                { for MARKERS.into_iter().map(|marker| html! {
                    <div
                        class="absolute badge badge-primary"
                        style={format!("top: {}%; left: {}%;", marker.top, marker.left)}
                    >
                        { marker.label }
                    </div>
                }) }
            </div>

            <a class="link link-primary" href={portal.config().maps_url.clone()} target="_blank" rel="noopener noreferrer">
                { "Open in Google Maps" }
            </a>
        </div>
    }
}
