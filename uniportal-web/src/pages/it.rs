use crate::components::Card;
use shared::content::services::{OUTAGE_NOTICE, SystemStatus, software_catalogue, system_board};
use shared::models::Page;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};

const fn status_dot(status: SystemStatus) -> &'static str {
    match status {
        SystemStatus::Operational => "bg-success",
        SystemStatus::Degraded => "bg-warning",
        SystemStatus::Outage => "bg-error",
    }
}

/// IT services page component
#[function_component(ItPage)]
pub fn it_page() -> Html {
    let outage = use_bool_toggle(false);

    let on_toggle = {
        let outage = outage.clone();
        Callback::from(move |_: Event| outage.toggle())
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{ Page::It.title() }</h1>
                <label class="label cursor-pointer gap-2 text-xs">
                    <input type="checkbox" class="checkbox checkbox-sm" checked={*outage} onchange={on_toggle} />
                    { "Simulate Outage" }
                </label>
            </div>

            if *outage {
                <div role="alert" class="alert alert-error">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6" />
                    <div>
                        <strong>{ "Major System Outage" }</strong>
                        <div>{ OUTAGE_NOTICE }</div>
                    </div>
                </div>
            }

            <Card title="System Status">
                <div class="grid grid-cols-[repeat(auto-fit,minmax(150px,1fr))] gap-4">
                    { for system_board(*outage).into_iter().map(|system| html! {
                        <div class="p-4 border border-base-300 rounded-lg text-center">
                            <div class={classes!("w-3", "h-3", "rounded-full", "mx-auto", "mb-2", status_dot(system.status))}></div>
                            <div class="font-bold text-sm">{ system.name }</div>
                            <div class="text-xs text-base-content/60">{ system.status.to_string() }</div>
                        </div>
                    }) }
                </div>
            </Card>

            <section>
                <h2 class="text-xl font-semibold mb-4">{ "Software Catalogue" }</h2>
                <Card>
                    <ul>
                        { for software_catalogue().into_iter().map(|software| html! {
                            <li class="flex justify-between items-center py-3 border-b border-base-300 last:border-none">
                                <div>
                                    <strong>{ software.name }</strong>
                                    <div class="text-xs">{ software.description }</div>
                                </div>
                                <button class="btn btn-outline btn-xs">{ "Download" }</button>
                            </li>
                        }) }
                    </ul>
                </Card>
            </section>
        </div>
    }
}
