//! Dashboard widgets.

use crate::app::use_portal;
use crate::components::card::Card;
use crate::models::app_state::AppState;
use shared::content::Inbox;
use shared::content::calendar::{EventKind, deadlines, events, todays_schedule};
use shared::content::inbox::MessageCategory;
use shared::content::personalization::{faculty_news, quick_links, recommendations, visa_status};
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

const TOP_NOTICES: usize = 3;

#[function_component(NotificationsWidget)]
pub fn notifications_widget() -> Html {
    let Some(portal) = use_portal() else {
        return html! {};
    };
    let inbox = Inbox::default();
    let notices = inbox.top_unread(TOP_NOTICES);

    html! {
        <Card title="Notices" last_updated="Live">
            if notices.is_empty() {
                <p class="text-base-content/60">{ "No new notices." }</p>
            } else {
                <ul>
                    { for notices.iter().map(|notice| {
                        let emergency = notice.category == MessageCategory::Emergency;
                        html! {
                            <li key={notice.id} class="pb-3 mb-3 border-b border-base-300">
                                <div class={classes!("font-semibold", "text-sm", "flex", "items-center", "gap-1", emergency.then_some("text-error"))}>
                                    if emergency {
                                        <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-4 h-4" />
                                    }
                                    { notice.title }
                                </div>
                                <div class="text-xs text-base-content/60">{ format!("{} • {}", notice.category, notice.date) }</div>
                            </li>
                        }
                    }) }
                </ul>
            }
            <button class="btn btn-outline w-full mt-2" onclick={portal.navigate_to(Page::Inbox.path())}>
                { format!("View Inbox ({})", inbox.unread_count()) }
            </button>
        </Card>
    }
}

#[function_component(DailyScheduleWidget)]
pub fn daily_schedule_widget() -> Html {
    let Some(portal) = use_portal() else {
        return html! {};
    };
    let all = events();
    let today = todays_schedule(&all);

    html! {
        <Card title="Daily Schedule" last_updated="Live">
            if today.is_empty() {
                <p>{ "No events today." }</p>
            } else {
                <ul>
                    { for today.iter().map(|event| {
                        let (clock, meridiem) = event.time_parts();
                        html! {
                            <li key={event.id} class="flex gap-3 mb-4">
                                <div class="flex flex-col items-center min-w-[50px]">
                                    <span class="font-semibold text-sm">{ clock }</span>
                                    <span class="text-[10px] text-base-content/60">{ meridiem }</span>
                                </div>
                                <div class="flex-1 p-3 bg-base-100 rounded border-l-4 border-primary">
                                    <div class="font-semibold">{ event.title }</div>
                                    <div class="text-xs text-base-content/60">{ event.location }</div>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            }
            <button class="btn btn-outline w-full mt-2" onclick={portal.navigate_to(Page::Calendar.path())}>
                { "View Full Calendar" }
            </button>
        </Card>
    }
}

#[function_component(DeadlinesWidget)]
pub fn deadlines_widget() -> Html {
    let all = events();

    html! {
        <Card title="Upcoming Deadlines" last_updated="Canvas Synced">
            <ul>
                { for deadlines(&all).into_iter().map(|item| {
                    let exam = item.kind == EventKind::Exam;
                    html! {
                        <li key={item.id} class="flex items-center justify-between mb-3 pb-3 border-b border-base-300">
                            <div>
                                <div class={classes!("font-semibold", "text-sm", exam.then_some("text-error"))}>
                                    if exam { { "❗ " } }
                                    { item.title }
                                </div>
                                <div class="text-xs text-base-content/60">{ format!("Due {}", item.date) }</div>
                            </div>
                            <a href={item.url} class="link link-primary text-xs">{ "View" }</a>
                        </li>
                    }
                }) }
            </ul>
        </Card>
    }
}

#[function_component(QuickLinksWidget)]
pub fn quick_links_widget() -> Html {
    let Some(portal) = use_portal() else {
        return html! {};
    };

    html! {
        <Card title="Quick Links" last_updated="Always live">
            <div class="grid grid-cols-[repeat(auto-fill,minmax(90px,1fr))] gap-3">
                { for quick_links().into_iter().map(|link| html! {
                    <button key={link.id} class="btn btn-outline btn-sm h-auto py-3" onclick={portal.navigate_to(link.path)}>
                        { link.label }
                    </button>
                }) }
                <button class="btn btn-ghost btn-sm border border-dashed border-base-300 h-auto py-3">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                </button>
            </div>
        </Card>
    }
}

#[function_component(FacultyNewsWidget)]
pub fn faculty_news_widget() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let news = faculty_news(&persona);

    html! {
        <Card title={news.title} last_updated="Today, 9:00 AM">
            <ul class="list-disc pl-5">
                { for news.items.iter().map(|item| html! { <li class="mb-2">{ *item }</li> }) }
            </ul>
        </Card>
    }
}

/// Visa summary; renders nothing for domestic students.
#[function_component(VisaWidget)]
pub fn visa_widget() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let Some(portal) = use_portal() else {
        return html! {};
    };
    let Some(visa) = visa_status(&persona) else {
        return html! {};
    };

    html! {
        <Card title="Visa Status" last_updated="Daily">
            <div
                class="flex items-center gap-3 p-3 rounded border border-success bg-success/10 cursor-pointer"
                onclick={portal.navigate_to(Page::Visa.path())}
            >
                <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-6 h-6 text-success" />
                <div>
                    <div class="font-semibold text-success">{ visa.summary }</div>
                    <div class="text-xs">{ format!("Expires: {}", visa.visa_expiry) }</div>
                </div>
            </div>
        </Card>
    }
}

#[function_component(LinkRecommendations)]
pub fn link_recommendations() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let portal = use_portal();

    html! {
        <Card title="Recommended for you" last_updated="Weekly">
            <ul>
                { for recommendations(&persona).into_iter().map(|link| {
                    // Only in-app paths navigate; the rest are placeholders.
                    let onclick = match (&portal, link.url.starts_with('/')) {
                        (Some(portal), true) => portal.navigate_to(link.url),
                        _ => Callback::from(|event: MouseEvent| event.prevent_default()),
                    };
                    html! {
                        <li class="mb-3">
                            <a href="#" class="link link-primary font-semibold flex items-center gap-2" {onclick}>
                                <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                                { link.label }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </Card>
    }
}
