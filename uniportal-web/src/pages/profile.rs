use crate::components::{Card, SensitiveField};
use crate::models::app_state::AppState;
use shared::content::interests::{INTEREST_TAGS, Interests};
use shared::content::security::PERSONAL_DETAILS;
use shared::models::Page;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Profile & settings page component
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user_state = use_selector(|state: &AppState| state.session.user.clone());
    let interests = use_state(Interests::default);
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold">{ Page::Profile.title() }</h1>

            <div class="flex items-center gap-4">
                <div class="avatar placeholder">
                    <div class="bg-primary/20 text-primary rounded-full w-16">
                        <span class="text-xl font-bold">{ &user.avatar }</span>
                    </div>
                </div>
                <div>
                    <div class="font-semibold text-lg">{ &user.name }</div>
                    <div class="text-sm text-base-content/60">{ format!("{} • {}", user.id, user.email) }</div>
                </div>
            </div>

            <section>
                <h2 class="text-xl font-semibold mb-4">{ "Personal Details" }</h2>
                <Card last_updated="1 Jan 2025">
                    { for PERSONAL_DETAILS.iter().map(|detail| html! {
                        <SensitiveField label={detail.label} value={detail.value} />
                    }) }
                    <div class="text-right mt-4">
                        <button class="btn btn-outline btn-sm">{ "Update Details at StudentOne" }</button>
                    </div>
                </Card>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">{ "Account Security" }</h2>
                <Card>
                    <div class="flex justify-between items-center mb-4 pb-4 border-b border-base-300">
                        <div>
                            <div class="font-semibold">{ "Password" }</div>
                            <div class="text-xs text-base-content/60">{ "Last changed 3 months ago" }</div>
                        </div>
                        <button class="btn btn-outline btn-xs">{ "Reset" }</button>
                    </div>
                    <div class="font-semibold mb-2">{ "Login History" }</div>
                    <div class="text-xs text-base-content/60 bg-base-100 p-2 rounded">
                        { format!("MacBook Pro • Chrome • {} (Current)", user.last_login) }
                    </div>
                </Card>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">{ "Communication Preferences" }</h2>
                <Card>
                    <div class="flex justify-between mb-3">
                        <span>{ "Official University Notices" }</span>
                        <span class="text-xs text-base-content/60">{ "Required" }</span>
                    </div>
                    <label class="flex justify-between mb-3 cursor-pointer">
                        <span>{ "Faculty Newsletter" }</span>
                        <input type="checkbox" class="checkbox checkbox-sm" checked=true />
                    </label>
                    <label class="flex justify-between cursor-pointer">
                        <span>{ "Clubs & Events" }</span>
                        <input type="checkbox" class="checkbox checkbox-sm" />
                    </label>
                </Card>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">{ "Interests" }</h2>
                <Card>
                    <p class="text-sm text-base-content/60 mb-4">{ "Select topics to refine your recommendations." }</p>
                    <div class="flex flex-wrap gap-2">
                        { for INTEREST_TAGS.into_iter().map(|tag| {
                            let selected = interests.contains(tag);
                            let onclick = {
                                let interests = interests.clone();
                                Callback::from(move |event: MouseEvent| {
                                    event.prevent_default();
                                    let mut next = (*interests).clone();
                                    next.toggle(tag);
                                    interests.set(next);
                                })
                            };
                            html! {
                                <button
                                    key={tag}
                                    class={classes!("btn", "btn-sm", "rounded-full", if selected { "btn-primary" } else { "btn-outline" })}
                                    {onclick}
                                >
                                    { tag }
                                </button>
                            }
                        }) }
                    </div>
                </Card>
            </section>
        </div>
    }
}
