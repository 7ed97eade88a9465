use crate::components::Card;
use shared::content::services::{campus_events, mentoring_programs};
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Student life page component
#[function_component(LifePage)]
pub fn life_page() -> Html {
    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{ Page::Life.title() }</h1>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2">
                    <h2 class="text-xl font-semibold mb-4">{ "Events" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for campus_events().into_iter().map(|event| html! {
                            <Card key={event.id}>
                                <div class="h-24 bg-primary/10 mb-3 rounded"></div>
                                <div class="font-bold">{ event.name }</div>
                                <div class="text-xs text-base-content/60 mb-2">{ event.date }</div>
                                <div class="flex items-center gap-2 text-xs">
                                    <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-4 h-4" />
                                    { format!("{} attending", event.attending) }
                                </div>
                                <button class="btn btn-primary btn-sm w-full mt-3">{ "Register" }</button>
                            </Card>
                        }) }
                    </div>
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-4">{ "Mentoring" }</h2>
                    <Card title="Connect">
                        <p class="text-sm mb-3">{ "Find a mentor to help navigate university life." }</p>
                        { for mentoring_programs().into_iter().map(|program| html! {
                            <div class="p-3 bg-base-100 rounded-lg mb-3">
                                <div class="font-bold text-sm">{ program.name }</div>
                                <p class="text-xs my-1">{ program.description }</p>
                                <button class="btn btn-outline btn-xs w-full">{ "Join Program" }</button>
                            </div>
                        }) }
                    </Card>
                </section>
            </div>
        </div>
    }
}
