use crate::app::use_portal;
use shared::models::LOGIN_PATH;
use yew::prelude::*;

/// Public page shown for every path while signed out, except the sign-in
/// page itself.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let Some(portal) = use_portal() else {
        return html! {};
    };

    html! {
        <div class="min-h-screen flex flex-col">
            <header class="navbar bg-base-100 border-b border-base-300 px-6 justify-between">
                <div class="text-2xl font-bold text-primary">{ "UniPortal" }</div>
                <button class="btn btn-primary" onclick={portal.navigate_to(LOGIN_PATH)}>{ "Log In" }</button>
            </header>
            <main class="flex-1">
                <section class="hero py-16 bg-gradient-to-br from-primary to-[#0f1d51] text-primary-content">
                    <div class="hero-content text-center max-w-3xl">
                        <div>
                            <h1 class="text-4xl font-bold mb-6">{ "Your Student Journey, Unified." }</h1>
                            <button class="btn btn-primary btn-lg" onclick={portal.navigate_to(LOGIN_PATH)}>
                                { "Access Student Portal" }
                            </button>
                        </div>
                    </div>
                </section>
            </main>
            <footer class="footer footer-center p-10 bg-neutral text-neutral-content">
                <p>{ "© 2025 University Portal Prototype" }</p>
            </footer>
        </div>
    }
}
