use crate::components::Card;
use shared::content::study::allocations;
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Timetable page component
#[function_component(TimetablePage)]
pub fn timetable_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">{ Page::Timetable.title() }</h1>
            <Card title="Allocation Status" last_updated="Today">
                <div role="alert" class="alert alert-warning mb-4">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-5 h-5" />
                    <div>
                        <strong>{ "Preference Entry Open" }</strong>
                        <div class="text-sm">{ "Enter your class preferences by Friday 5pm." }</div>
                    </div>
                </div>
                { for allocations().into_iter().map(|allocation| html! {
                    <div class="flex justify-between items-center border-b border-base-300 py-3">
                        <div>
                            <div class="font-bold">{ allocation.code }</div>
                            <div class="text-sm text-base-content/70">{ allocation.summary }</div>
                        </div>
                        <button class={classes!("btn", "btn-sm", if allocation.pending { "btn-primary" } else { "btn-outline" })}>
                            { allocation.action }
                        </button>
                    </div>
                }) }
            </Card>
        </div>
    }
}
