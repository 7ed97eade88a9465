use crate::models::app_state::AppState;
use shared::content::Checklist;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// Welcome checklist for commencing students. Dismissing it hides it until
/// the dashboard is next opened.
#[function_component(OnboardingChecklist)]
pub fn onboarding_checklist() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let checklist = use_state(Checklist::default);
    let dismissed = use_bool_toggle(false);

    if !Checklist::applies_to(&persona) || *dismissed {
        return html! {};
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dismissed.toggle();
        })
    };

    let progress = checklist.progress();

    html! {
        <div class="card bg-primary/10 mb-6">
            <div class="card-body">
                <div class="flex justify-between items-start mb-4">
                    <div>
                        <h3 class="card-title text-primary">{ "Welcome to University!" }</h3>
                        <p class="text-sm mt-1">{ "Complete your onboarding tasks to get started." }</p>
                    </div>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_dismiss}>
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                    </button>
                </div>

                <progress class="progress progress-success w-full mb-4" value={progress.to_string()} max="100"></progress>

                <ul>
                    { for checklist.tasks().iter().map(|task| {
                        let onclick = {
                            let checklist = checklist.clone();
                            let id = task.id;
                            Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                let mut next = (*checklist).clone();
                                if next.toggle(id) {
                                    checklist.set(next);
                                }
                            })
                        };
                        html! {
                            <li key={task.id} class={classes!("flex", "items-center", "mb-2", task.completed.then_some("opacity-60"))}>
                                <button
                                    class={classes!(
                                        "btn", "btn-circle", "btn-xs", "mr-3",
                                        if task.completed { "btn-success" } else { "btn-outline btn-primary" }
                                    )}
                                    disabled={task.automatic}
                                    {onclick}
                                >
                                    if task.completed {
                                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-3 h-3" />
                                    }
                                </button>
                                <span class={classes!(task.completed.then_some("line-through"))}>{ task.label }</span>
                                if task.automatic {
                                    <span class="badge badge-outline badge-sm ml-auto">{ "System" }</span>
                                }
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </div>
    }
}
