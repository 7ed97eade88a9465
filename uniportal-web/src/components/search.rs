use crate::app::use_portal;
use crate::models::app_state::AppState;
use gloo_timers::callback::Timeout;
use shared::content::search::{placeholder, search};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// Delay before the results close after the input loses focus, long enough
/// for a click on a result to land first.
const BLUR_CLOSE_MS: u32 = 200;

#[function_component(GlobalSearch)]
pub fn global_search() -> Html {
    let query = use_state(String::new);
    let open = use_state(|| false);
    let authenticated = use_selector(|state: &AppState| state.session.is_authenticated());
    let portal = use_portal();

    let on_input = {
        let query = query.clone();
        let open = open.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
                open.set(true);
            }
        })
    };

    let on_focus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(true))
    };

    let on_blur = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| {
            let open = open.clone();
            Timeout::new(BLUR_CLOSE_MS, move || open.set(false)).forget();
        })
    };

    let results = search(&query);

    html! {
        <div class="relative w-full max-w-md">
            <form role="search" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                <label class="input input-bordered rounded-full flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder={placeholder(*authenticated)}
                        value={(*query).clone()}
                        oninput={on_input}
                        onfocus={on_focus}
                        onblur={on_blur}
                    />
                </label>
            </form>
            if *open && !query.is_empty() {
                <div class="card bg-base-100 shadow-xl absolute top-full left-0 right-0 mt-2 z-[100]">
                    if results.is_empty() {
                        <div class="p-4 text-center">{ "No results found." }</div>
                    } else {
                        <ul class="menu w-full">
                            { for results.iter().map(|entry| {
                                let onclick = portal
                                    .as_ref()
                                    .map(|portal| portal.navigate_to(entry.path));
                                html! {
                                    <li key={entry.id}>
                                        <a href="#" {onclick}>
                                            <div>
                                                <div class="text-sm font-semibold">{ entry.title }</div>
                                                <div class="text-xs text-base-content/60">{ entry.category }</div>
                                            </div>
                                        </a>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
            }
        </div>
    }
}
