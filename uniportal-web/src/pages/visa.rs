use crate::components::{Card, SuccessCard};
use crate::models::app_state::AppState;
use shared::content::personalization::{COE_EXTENSION_CONFIRMATION, visa_status};
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// Visa compliance page. Domestic students are sent back to the dashboard
/// before this renders; without visa details it renders nothing.
#[function_component(VisaPage)]
pub fn visa_page() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let confirmation = use_state(|| None::<String>);
    let Some(visa) = visa_status(&persona) else {
        return html! {};
    };

    if let Some(message) = (*confirmation).clone() {
        let on_dismiss = {
            let confirmation = confirmation.clone();
            Callback::from(move |()| confirmation.set(None))
        };
        return html! {
            <SuccessCard title="Extension Requested" {message} {on_dismiss} />
        };
    }

    let on_extend = {
        let confirmation = confirmation.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            confirmation.set(Some(COE_EXTENSION_CONFIRMATION.to_string()));
        })
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold">{ Page::Visa.title() }</h1>

            <Card title="Compliance Status">
                <div class="flex gap-6 items-center p-6 rounded-lg border border-success bg-success/10 mb-6">
                    <div class="w-14 h-14 rounded-full bg-success text-success-content flex items-center justify-center">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-6 h-6" />
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-success">{ "Compliant" }</h3>
                        <p>{ "Your Confirmation of Enrolment (CoE) and Visa status are valid." }</p>
                    </div>
                </div>

                <div class="stats stats-vertical md:stats-horizontal w-full bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{ "Visa Expiry" }</div>
                        <div class="stat-value text-lg">{ visa.visa_expiry }</div>
                        <div class="stat-desc">{ visa.summary }</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{ "CoE End Date" }</div>
                        <div class="stat-value text-lg">{ visa.coe_end }</div>
                    </div>
                </div>

                <div class="mt-6 text-right">
                    <button class="btn btn-outline" onclick={on_extend}>{ "Request CoE Extension" }</button>
                </div>
            </Card>
        </div>
    }
}
