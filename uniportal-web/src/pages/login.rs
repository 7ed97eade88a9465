use crate::app::use_portal;
use yew::prelude::*;

/// Simulated sign-in. There is no credential check; the button always
/// signs in the fixed student.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let Some(portal) = use_portal() else {
        return html! {};
    };

    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        portal.login();
    });

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-6">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <h1 class="text-3xl font-bold text-primary text-center mb-8">{ "UniPortal" }</h1>
                    <button class="btn btn-primary w-full" {onclick}>{ "Sign In (Simulated)" }</button>
                </div>
            </div>
        </div>
    }
}
