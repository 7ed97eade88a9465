use crate::app::use_portal;
use crate::models::app_state::AppState;
use shared::content::Tutorial;
use shared::content::tutorial::{Advance, STEPS};
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// First-run tour. Finishing or skipping marks the tutorial as seen for the
/// rest of the session.
#[function_component(TutorialOverlay)]
pub fn tutorial_overlay() -> Html {
    let seen = use_selector(|state: &AppState| state.session.tutorial_seen);
    let tutorial = use_state(Tutorial::default);
    let Some(portal) = use_portal() else {
        return html! {};
    };

    if *seen {
        return html! {};
    }

    let on_skip = {
        let portal = portal.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            portal.mark_tutorial_seen();
        })
    };

    let on_next = {
        let tutorial = tutorial.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            match tutorial.advance() {
                Advance::Step(step) => tutorial.set(Tutorial::at(step)),
                Advance::Finished => portal.mark_tutorial_seen(),
            }
        })
    };

    let step = tutorial.current();

    html! {
        <div class="fixed inset-0 z-[9000] bg-black/60 flex items-center justify-center">
            <div class="card bg-base-100 max-w-sm text-center">
                <div class="card-body items-center">
                    <div class="text-5xl mb-4">{ "✨" }</div>
                    <h2 class="card-title mb-3">{ step.title }</h2>
                    <p class="mb-6 text-base-content/70">{ step.description }</p>
                    <div class="flex w-full justify-between items-center">
                        <button class="btn btn-ghost btn-sm" onclick={on_skip}>{ "Skip" }</button>
                        <div class="flex gap-1">
                            { for (0..STEPS.len()).map(|index| html! {
                                <div class={classes!(
                                    "w-2", "h-2", "rounded-full",
                                    if index == tutorial.step() { "bg-primary" } else { "bg-base-300" }
                                )}></div>
                            }) }
                        </div>
                        <button class="btn btn-primary btn-sm" onclick={on_next}>{ tutorial.button_label() }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
