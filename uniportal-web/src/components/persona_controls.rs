use crate::app::{PortalContext, use_portal};
use crate::models::app_state::AppState;
use shared::models::{Citizenship, Cohort, Faculty, PersonaUpdate, Status};
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// One `<select>` bound to a persona facet. Options come from the enum, and
/// the selected value is parsed back before a single-facet update is sent.
fn facet_select<T>(
    title: &'static str,
    current: T,
    label: fn(T) -> &'static str,
    update: fn(T) -> PersonaUpdate,
    portal: &PortalContext,
) -> Html
where
    T: IntoEnumIterator + AsRef<str> + FromStr + Copy + PartialEq + 'static,
{
    let onchange = {
        let portal = portal.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match T::from_str(&select.value()) {
                Ok(value) => portal.update_persona(update(value)),
                Err(_) => log::warn!("unknown {title} option `{}`", select.value()),
            }
        })
    };

    html! {
        <label class="form-control w-full">
            <div class="label"><span class="label-text text-xs">{ title }</span></div>
            <select class="select select-bordered select-sm w-full" {onchange}>
                { for T::iter().map(|option| html! {
                    <option value={option.as_ref().to_string()} selected={option == current}>
                        { label(option) }
                    </option>
                }) }
            </select>
        </label>
    }
}

/// Floating panel for switching the simulated student persona.
#[function_component(PersonaControls)]
pub fn persona_controls() -> Html {
    let open = use_bool_toggle(false);
    let persona = use_selector(|state: &AppState| state.persona);
    let Some(portal) = use_portal() else {
        return html! {};
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            open.toggle();
        })
    };

    html! {
        <div class="fixed bottom-6 right-6 z-[5000]">
            if *open {
                <div class="card bg-base-100 shadow-2xl w-72">
                    <div class="card-body p-4">
                        <div class="flex justify-between items-center border-b border-base-300 pb-2 mb-2">
                            <h4 class="font-semibold text-sm text-primary">{ "Personalisation Engine" }</h4>
                            <button class="btn btn-ghost btn-xs btn-circle" onclick={toggle.clone()}>
                                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                            </button>
                        </div>
                        { facet_select("Cohort", persona.cohort, Cohort::label, |v| PersonaUpdate::default().cohort(v), &portal) }
                        { facet_select("Faculty", persona.faculty, Faculty::label, |v| PersonaUpdate::default().faculty(v), &portal) }
                        { facet_select("Status", persona.status, Status::label, |v| PersonaUpdate::default().status(v), &portal) }
                        { facet_select("Citizenship", persona.citizenship, Citizenship::label, |v| PersonaUpdate::default().citizenship(v), &portal) }
                    </div>
                </div>
            } else {
                <button
                    class="btn btn-primary btn-circle shadow-lg"
                    title="Toggle Student Persona"
                    onclick={toggle}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="w-6 h-6" />
                </button>
            }
        </div>
    }
}
