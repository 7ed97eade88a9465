use crate::app::use_portal;
use crate::components::{Card, Modal};
use shared::content::calendar::{
    CalendarEvent, CalendarView, EventFilters, EventKind, MONTH_DAYS, MONTH_EXAM_DAY, events, feeds,
};
use shared::models::Page;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

const fn kind_badge(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Class => "badge-info",
        EventKind::Assignment => "badge-warning",
        EventKind::Exam => "badge-error",
        EventKind::Date => "badge-success",
    }
}

fn copy_to_clipboard(text: &str) {
    match web_sys::window() {
        Some(window) => {
            // The returned promise is not awaited.
            let _ = window.navigator().clipboard().write_text(text);
            log::debug!("Copied feed URL {text}");
        }
        None => log::warn!("No window; cannot copy {text}"),
    }
}

fn planner_item(event: &CalendarEvent) -> Html {
    let badge = event.badge();
    html! {
        <div key={event.id} class="card bg-base-100 shadow mb-3">
            <div class="card-body p-4 flex-row gap-4 items-center">
                <div class="text-center min-w-[60px] border-r border-base-300 pr-4">
                    <div class="text-xs text-base-content/60 uppercase">{ badge.top }</div>
                    <div class="font-bold">{ badge.bottom }</div>
                </div>
                <div class="flex-1">
                    <div class="flex gap-2 items-center mb-1">
                        <span class={classes!("badge", "badge-sm", kind_badge(event.kind))}>{ event.kind.to_string() }</span>
                        <h3 class="font-semibold">{ event.title }</h3>
                    </div>
                    <div class="text-sm text-base-content/70">{ format!("{} • {}", event.time, event.location) }</div>
                </div>
                <a href={event.url} class="link link-primary text-sm">{ "View Details →" }</a>
            </div>
        </div>
    }
}

fn month_grid() -> Html {
    html! {
        <Card>
            <div class="grid grid-cols-7 gap-2 text-center">
                { for WEEKDAYS.into_iter().map(|day| html! { <div class="font-bold">{ day }</div> }) }
                { for (1..=MONTH_DAYS).map(|day| {
                    let exam = day == MONTH_EXAM_DAY;
                    html! {
                        <div class={classes!(
                            "h-20", "border", "border-base-300", "p-1", "text-left", "text-xs",
                            exam.then_some("bg-error/10")
                        )}>
                            { day }
                            if exam {
                                <div class="badge badge-error badge-xs mt-1">{ "Exam" }</div>
                            }
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}

/// Unified calendar page with the planner list, the month grid and the feed
/// subscription dialog.
#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let view = use_state(CalendarView::default);
    let filters = use_state(EventFilters::default);
    let show_filters = use_bool_toggle(false);
    let subscribe_open = use_state(|| false);
    let all_events = use_memo((), |()| events());
    let Some(portal) = use_portal() else {
        return html! {};
    };

    let open_subscribe = {
        let subscribe_open = subscribe_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            subscribe_open.set(true);
        })
    };
    let close_subscribe = {
        let subscribe_open = subscribe_open.clone();
        Callback::from(move |()| subscribe_open.set(false))
    };
    let on_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            show_filters.toggle();
        })
    };

    let body = match *view {
        CalendarView::Planner => {
            let visible = filters.apply(&all_events);
            html! {
                <div>
                    if visible.is_empty() {
                        <p class="text-center text-base-content/60 py-8">{ "No events match your filters." }</p>
                    } else {
                        { for visible.into_iter().map(planner_item) }
                    }
                </div>
            }
        }
        CalendarView::Month => month_grid(),
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap justify-between items-center gap-4">
                <h1 class="text-3xl font-bold">{ Page::Calendar.title() }</h1>
                <div class="flex gap-2">
                    <button class="btn btn-outline btn-sm" onclick={open_subscribe}>
                        <Icon icon_id={IconId::HeroiconsOutlineShare} class="w-4 h-4" />
                        { "Subscribe" }
                    </button>
                    <div class="join">
                        { for CalendarView::iter().map(|option| {
                            let onclick = {
                                let view = view.clone();
                                Callback::from(move |event: MouseEvent| {
                                    event.prevent_default();
                                    view.set(option);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("btn", "btn-sm", "join-item", (*view == option).then_some("btn-primary"))}
                                    {onclick}
                                >
                                    { option.to_string() }
                                </button>
                            }
                        }) }
                    </div>
                    <button
                        class={classes!("btn", "btn-sm", "btn-square", (*show_filters).then_some("btn-active"))}
                        onclick={on_filters}
                    >
                        <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="w-4 h-4" />
                    </button>
                </div>
            </div>

            if *show_filters {
                <div class="card bg-base-200">
                    <div class="card-body p-4 flex-row flex-wrap gap-6">
                        { for EventKind::iter().map(|kind| {
                            let onchange = {
                                let filters = filters.clone();
                                Callback::from(move |_: Event| filters.set(filters.toggled(kind)))
                            };
                            html! {
                                <label class="label cursor-pointer gap-2 capitalize">
                                    <input type="checkbox" class="checkbox checkbox-sm" checked={filters.allows(kind)} {onchange} />
                                    { kind.plural() }
                                </label>
                            }
                        }) }
                    </div>
                </div>
            }

            { body }

            <div class="text-xs text-base-content/60 text-right">{ "Last updated: Just now" }</div>

            <Modal open={*subscribe_open} title="Subscribe to Calendar" on_close={close_subscribe}>
                <p class="mb-4">{ "Add your university schedule to Outlook, Google Calendar, or Apple Calendar." }</p>
                { for feeds(&portal.config().calendar_feed_base).into_iter().map(|feed| {
                    let onclick = {
                        let url = feed.url.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            copy_to_clipboard(&url);
                        })
                    };
                    html! {
                        <div class="mb-4">
                            <label class="label font-semibold">{ feed.label }</label>
                            <div class="join w-full">
                                <input type="text" class="input input-bordered input-sm join-item flex-1" readonly=true value={feed.url} />
                                <button class="btn btn-sm join-item" {onclick}>{ "Copy" }</button>
                            </div>
                        </div>
                    }
                }) }
            </Modal>
        </div>
    }
}
