use crate::app::use_portal;
use crate::components::Card;
use crate::models::app_state::AppState;
use shared::content::help::{POPULAR_TOPICS, Triage, phone_href, triage};
use shared::content::personalization::help_recommendations;
use shared::models::Page;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

fn placeholder_link(label: String) -> Html {
    html! {
        <li>
            <a href="#" class="link" onclick={Callback::from(|event: MouseEvent| event.prevent_default())}>{ label }</a>
        </li>
    }
}

fn still_need_help(on_contact: Callback<MouseEvent>) -> Html {
    html! {
        <div class="mt-6 text-center space-y-2">
            <p>{ "Still need help?" }</p>
            <button class="btn btn-outline" onclick={on_contact}>{ "Contact Stop 1" }</button>
        </div>
    }
}

/// Help & support page with query triage and the Stop 1 contact panel.
#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let query = use_state(String::new);
    let show_contact = use_bool_toggle(false);
    let Some(portal) = use_portal() else {
        return html! {};
    };
    let config = portal.config();

    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if !*show_contact {
                show_contact.toggle();
            }
        })
    };

    let answer = match triage(&query) {
        Triage::Browse => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <Card title="Popular Topics">
                    <ul class="list-disc pl-5 leading-loose">
                        { for POPULAR_TOPICS.into_iter().map(|topic| placeholder_link(topic.to_string())) }
                    </ul>
                </Card>
                <Card title="Recommended for You">
                    <ul class="list-disc pl-5 leading-loose">
                        { for help_recommendations(&persona).into_iter().map(|topic| placeholder_link(topic.to_string())) }
                    </ul>
                </Card>
            </div>
        },
        Triage::Answer { text } => html! {
            <>
                <Card title="AI Answer">
                    <div class="bg-primary/10 p-4 rounded-lg mb-4">
                        <p>{ text }</p>
                        <div class="text-[10px] mt-2 opacity-60">{ "Generated by AI" }</div>
                    </div>
                    <p>
                        { "Was this helpful? " }
                        <button class="btn btn-ghost btn-xs">{ "👍" }</button>
                        <button class="btn btn-ghost btn-xs">{ "👎" }</button>
                    </p>
                </Card>
                { still_need_help(on_contact) }
            </>
        },
        Triage::Results { query } => html! {
            <>
                <Card title="Search Results">
                    <ul class="list-disc pl-5">
                        { placeholder_link(format!("General FAQ about \"{query}\"")) }
                        { placeholder_link("Student Handbook Entry".to_string()) }
                    </ul>
                </Card>
                { still_need_help(on_contact) }
            </>
        },
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div class="text-center py-10 bg-primary text-primary-content rounded-lg">
                <h1 class="text-3xl font-bold mb-4">{ Page::Help.title() }</h1>
                <input
                    type="text"
                    class="input w-4/5 rounded-full text-base-content"
                    placeholder="Type your question (e.g. 'Exams', 'Visa')..."
                    value={(*query).clone()}
                    oninput={on_input}
                />
            </div>

            { answer }

            if *show_contact {
                <Card title="Contact Stop 1">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="text-center p-4 border border-base-300 rounded-lg">
                            <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-6 h-6 mx-auto" />
                            <div class="font-semibold mt-2">{ "Call Us" }</div>
                            <a class="link" href={phone_href(&config.support_phone)}>{ &config.support_phone }</a>
                            <div class="text-xs text-base-content/60">{ "9am - 5pm Mon-Fri" }</div>
                        </div>
                        <div class="text-center p-4 border border-base-300 rounded-lg">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-6 h-6 mx-auto" />
                            <div class="font-semibold mt-2">{ "Visit Us" }</div>
                            <div>{ &config.support_address }</div>
                            <a href="#" class="link text-xs" onclick={portal.navigate_to(Page::Map.path())}>{ "View on Map" }</a>
                        </div>
                    </div>
                </Card>
            }
        </div>
    }
}
