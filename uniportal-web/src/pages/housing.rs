use crate::components::{Card, SuccessCard};
use shared::content::services::{grants, housing};
use shared::models::Page;
use yew::prelude::*;

/// Accommodation & wellbeing page component
#[function_component(HousingPage)]
pub fn housing_page() -> Html {
    let confirmation = use_state(|| None::<String>);

    if let Some(message) = (*confirmation).clone() {
        let on_dismiss = {
            let confirmation = confirmation.clone();
            Callback::from(move |()| confirmation.set(None))
        };
        return html! {
            <SuccessCard title="Application Submitted" {message} {on_dismiss} />
        };
    }

    let confirm = |message: String| {
        let confirmation = confirmation.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            confirmation.set(Some(message.clone()));
        })
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{ Page::Housing.title() }</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section>
                    <h2 class="text-xl font-semibold mb-4">{ "Housing Directory" }</h2>
                    <Card>
                        { for housing().into_iter().map(|home| html! {
                            <div key={home.id} class="border border-base-300 rounded-lg p-4 mb-4">
                                <div class="flex justify-between mb-2">
                                    <div class="font-bold">{ home.name }</div>
                                    <span class="badge badge-primary badge-outline badge-sm">{ home.status }</span>
                                </div>
                                <div class="text-sm text-base-content/60 mb-3">{ format!("{} • {}", home.kind, home.price) }</div>
                                <button class="btn btn-primary btn-sm w-full" onclick={confirm(home.application_confirmation())}>
                                    { "Apply Now" }
                                </button>
                            </div>
                        }) }
                    </Card>
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">{ "Scholarships & Grants" }</h2>
                    <Card>
                        <div class="alert alert-info text-sm mb-4">{ "Based on your profile, you are eligible for:" }</div>
                        <ul>
                            { for grants().into_iter().map(|grant| html! {
                                <li class="pb-4 mb-4 border-b border-base-300 last:border-none">
                                    <div class="font-bold">{ grant.name }</div>
                                    <p class="text-xs mt-1 mb-2">{ grant.description }</p>
                                    <button class="btn btn-outline btn-xs" onclick={confirm(grant.confirmation.to_string())}>
                                        { "Apply" }
                                    </button>
                                </li>
                            }) }
                        </ul>
                    </Card>
                </section>
            </div>
        </div>
    }
}
