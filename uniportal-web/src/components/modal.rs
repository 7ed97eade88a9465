use yew::{Callback, Children, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button emits `on_close`; nothing renders while closed.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="fixed inset-0 z-[2000] flex items-center justify-center">
            <div class="absolute inset-0 bg-black/50" onclick={close.clone()}></div>
            <div class="card bg-base-100 shadow-2xl relative w-full max-w-md m-6">
                <div class="card-body">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="card-title">{ &props.title }</h3>
                        <button class="btn btn-ghost btn-sm btn-circle" onclick={close} aria-label="Close">
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    fn props(open: bool) -> ModalProps {
        ModalProps {
            open,
            title: "Security Check".to_string(),
            on_close: Callback::noop(),
            children: Children::default(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_closed_modal_renders_nothing() {
        let rendered = ServerRenderer::<Modal>::with_props(|| props(false)).render().await;
        assert!(!rendered.contains("Security Check"));
    }

    #[wasm_bindgen_test]
    async fn test_open_modal_renders_title() {
        let rendered = ServerRenderer::<Modal>::with_props(|| props(true)).render().await;
        assert!(rendered.contains("Security Check"));
    }
}
