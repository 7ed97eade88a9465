use crate::components::modal::Modal;
use shared::content::PinGate;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SensitiveFieldProps {
    pub label: String,
    pub value: String,
}

/// A masked value that asks for the PIN before revealing itself.
#[function_component(SensitiveField)]
pub fn sensitive_field(props: &SensitiveFieldProps) -> Html {
    let gate = use_state(PinGate::default);
    let pin = use_state(String::new);

    let on_toggle = {
        let gate = gate.clone();
        let pin = pin.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let mut next = (*gate).clone();
            next.toggle();
            if next.is_prompting() {
                pin.set(String::new());
            }
            gate.set(next);
        })
    };

    let on_close = {
        let gate = gate.clone();
        Callback::from(move |()| {
            let mut next = (*gate).clone();
            next.dismiss();
            gate.set(next);
        })
    };

    let on_cancel = {
        let on_close = on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_close.emit(());
        })
    };

    let on_input = {
        let pin = pin.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                pin.set(input.value());
            }
        })
    };

    let on_submit = {
        let gate = gate.clone();
        let pin = pin.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*gate).clone();
            if let Err(err) = next.submit(&pin) {
                log::debug!("PIN rejected: {err}");
            }
            gate.set(next);
        })
    };

    let revealed = gate.is_revealed();

    html! {
        <div class="mb-4">
            <div class="text-xs text-base-content/60 mb-1">{ &props.label }</div>
            <div class="flex items-center justify-between p-3 bg-base-200 rounded border border-base-300">
                <div class="font-semibold">{ gate.display(&props.value) }</div>
                <button
                    class="btn btn-link btn-sm"
                    onclick={on_toggle}
                    aria-label={if revealed { "Hide value" } else { "Reveal value" }}
                >
                    if revealed {
                        { "Hide" }
                    } else {
                        <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                        { "Reveal" }
                    }
                </button>
            </div>

            <Modal open={gate.is_prompting()} title="Security Check" {on_close}>
                <form onsubmit={on_submit}>
                    <p class="mb-4 text-sm">{ "Enter your 4-digit PIN to reveal sensitive information." }</p>
                    <input
                        type="password"
                        maxlength="4"
                        class="input input-bordered w-full text-center tracking-widest text-lg mb-2"
                        placeholder="PIN (0000)"
                        value={(*pin).clone()}
                        oninput={on_input}
                    />
                    if let Some(err) = gate.error() {
                        <div class="text-error text-xs mb-2">{ err.to_string() }</div>
                    }
                    <div class="flex justify-end gap-2 mt-4">
                        <button type="button" class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                        <button type="submit" class="btn btn-primary">{ "Confirm" }</button>
                    </div>
                    <div class="text-center mt-3">
                        <button type="button" class="btn btn-link btn-xs">{ "Forgot PIN?" }</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::content::security::MASK;
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_value_starts_masked() {
        let rendered = ServerRenderer::<SensitiveField>::with_props(|| SensitiveFieldProps {
            label: "Tax File Number".to_string(),
            value: "123 456 789".to_string(),
        })
        .render()
        .await;
        assert!(rendered.contains(MASK));
        assert!(!rendered.contains("123 456 789"));
        assert!(!rendered.contains("Security Check"));
    }
}
