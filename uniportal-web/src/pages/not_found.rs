use crate::app::use_portal;
use shared::models::ROOT_PATH;
use yew::prelude::*;

/// Terminal view for unknown authenticated paths. Leaving it takes an
/// explicit navigation.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let back = use_portal().map(|portal| portal.navigate_to(ROOT_PATH));

    html! {
        <div class="p-10 text-center space-y-4">
            <p class="text-lg">{ "Page not found" }</p>
            if let Some(onclick) = back {
                <button class="btn btn-outline" {onclick}>{ "Back to Dashboard" }</button>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_not_found_renders_message() {
        let rendered = ServerRenderer::<NotFoundPage>::new().render().await;
        assert!(rendered.contains("Page not found"));
    }
}
