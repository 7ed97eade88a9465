use shared::content::tasks::{EnquiryStatus, TasksTab, enquiries, student_tasks, toggle_task};
use shared::models::Page;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Tasks & enquiries page component
#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let tab = use_state(TasksTab::default);
    let tasks = use_state(student_tasks);

    let body = match *tab {
        TasksTab::Tasks => html! {
            <div>
                { for tasks.iter().map(|task| {
                    let onclick = {
                        let tasks = tasks.clone();
                        let id = task.id;
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            let mut next = (*tasks).clone();
                            toggle_task(&mut next, id);
                            tasks.set(next);
                        })
                    };
                    html! {
                        <div key={task.id} class={classes!("card", "bg-base-100", "shadow", "mb-3", task.completed.then_some("opacity-60"))}>
                            <div class="card-body p-4 flex-row items-center gap-4">
                                <button
                                    class={classes!("btn", "btn-circle", "btn-xs", if task.completed { "btn-success" } else { "btn-outline btn-primary" })}
                                    {onclick}
                                >
                                    if task.completed {
                                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-3 h-3" />
                                    }
                                </button>
                                <div class="flex-1">
                                    <div class={classes!("font-semibold", task.completed.then_some("line-through"))}>{ task.title }</div>
                                    <div class="text-xs text-base-content/60">{ format!("Due: {}", task.due) }</div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
        TasksTab::Enquiries => html! {
            <div>
                <div class="text-right mb-4">
                    <button class="btn btn-primary">{ "New Enquiry" }</button>
                </div>
                { for enquiries().into_iter().map(|enquiry| html! {
                    <div key={enquiry.id} class="card bg-base-100 shadow mb-4">
                        <div class="card-body p-5">
                            <div class="flex justify-between mb-2">
                                <h3 class="font-semibold">{ enquiry.title }</h3>
                                <span class={classes!(
                                    "badge", "badge-sm",
                                    if enquiry.status == EnquiryStatus::Closed { "badge-ghost" } else { "badge-info" }
                                )}>
                                    { enquiry.status.to_string() }
                                </span>
                            </div>
                            <p class="text-sm text-base-content/80 mb-3">{ format!("Latest: \"{}\"", enquiry.last_response) }</p>
                            <div class="flex justify-between text-xs text-base-content/60">
                                <span>{ format!("Updated: {}", enquiry.updated) }</span>
                                <a href="#" class="link link-primary" onclick={Callback::from(|event: MouseEvent| event.prevent_default())}>
                                    { "View Details" }
                                </a>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">{ Page::Tasks.title() }</h1>

            <div role="tablist" class="tabs tabs-bordered">
                { for TasksTab::iter().map(|option| {
                    let onclick = {
                        let tab = tab.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            tab.set(option);
                        })
                    };
                    html! {
                        <a role="tab" class={classes!("tab", "font-semibold", (*tab == option).then_some("tab-active"))} {onclick}>
                            { option.to_string() }
                        </a>
                    }
                }) }
            </div>

            { body }
        </div>
    }
}
