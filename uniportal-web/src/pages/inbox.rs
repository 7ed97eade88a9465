use crate::components::UrgentAlert;
use shared::content::inbox::MessageCategory;
use shared::content::{Inbox, InboxFilter};
use shared::models::Page;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Inbox & notices page component
#[function_component(InboxPage)]
pub fn inbox_page() -> Html {
    let inbox = use_state(Inbox::default);
    let filter = use_state(InboxFilter::default);
    // The emergency alert can be dismissed once per visit.
    let alert_dismissed = use_state(|| false);

    let urgent = (!*alert_dismissed)
        .then(|| inbox.urgent().cloned())
        .flatten();
    let on_alert_close = {
        let alert_dismissed = alert_dismissed.clone();
        Callback::from(move |()| alert_dismissed.set(true))
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex flex-wrap justify-between items-center gap-4">
                <h1 class="text-3xl font-bold">{ Page::Inbox.title() }</h1>
                <div class="flex gap-2">
                    { for InboxFilter::iter().map(|option| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                filter.set(option);
                            })
                        };
                        html! {
                            <button
                                class={classes!("btn", "btn-xs", "rounded-full", if *filter == option { "btn-primary" } else { "btn-outline" })}
                                {onclick}
                            >
                                { option.to_string() }
                            </button>
                        }
                    }) }
                </div>
            </div>

            if let Some(message) = urgent {
                <UrgentAlert {message} on_close={on_alert_close} />
            }

            <div class="flex flex-col gap-4">
                { for inbox.filtered(*filter).map(|message| {
                    let onclick = {
                        let inbox = inbox.clone();
                        let id = message.id;
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            let mut next = (*inbox).clone();
                            next.toggle_read(id);
                            inbox.set(next);
                        })
                    };
                    let emergency = message.category == MessageCategory::Emergency;
                    html! {
                        <div key={message.id} class={classes!(
                            "card", "bg-base-100", "shadow",
                            if message.read { "border border-base-300" } else { "border-l-4 border-primary" }
                        )}>
                            <div class="card-body p-5">
                                <div class="flex justify-between items-start mb-2">
                                    <div class="flex gap-2 items-center">
                                        if emergency {
                                            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-5 h-5 text-error" />
                                        }
                                        <h3 class="font-semibold">{ message.title }</h3>
                                        if !message.read {
                                            <span class="badge badge-primary badge-sm">{ "New" }</span>
                                        }
                                    </div>
                                    <span class="text-xs text-base-content/60">{ message.date }</span>
                                </div>
                                <p class="text-sm text-base-content/80 mb-3">{ message.body }</p>
                                <div class="flex justify-between items-center">
                                    <span class="badge badge-ghost badge-sm">{ message.category.to_string() }</span>
                                    <button class="btn btn-link btn-xs" {onclick}>
                                        { if message.read { "Mark Unread" } else { "Mark Read" } }
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
