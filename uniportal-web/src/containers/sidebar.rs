use crate::app::use_portal;
use crate::models::app_state::AppState;
use shared::models::{NavIcon, NavItem};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

const fn icon_for(icon: NavIcon) -> IconId {
    match icon {
        NavIcon::Grid => IconId::HeroiconsOutlineHome,
        NavIcon::Bell => IconId::HeroiconsOutlineBell,
        NavIcon::Calendar => IconId::HeroiconsOutlineCalendar,
        NavIcon::File => IconId::HeroiconsOutlineDocumentText,
        NavIcon::LifeBuoy => IconId::HeroiconsOutlineLifebuoy,
        NavIcon::Map => IconId::HeroiconsOutlineMap,
    }
}

fn item_label(item: &NavItem) -> Html {
    html! {
        <span class="flex items-center gap-3">
            if let Some(icon) = item.icon {
                <Icon icon_id={icon_for(icon)} class="w-5 h-5" />
            }
            { &item.label }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Emitted after a navigation so the mobile drawer can close.
    pub on_close: Callback<()>,
}

/// Persona-filtered navigation tree. One group is expanded at a time.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let expanded = use_state(|| None::<String>);
    // Subscribing to the persona re-renders the tree when it changes.
    let _persona = use_selector(|state: &AppState| state.persona);
    let current_path = use_selector(|state: &AppState| state.path.clone());
    let Some(portal) = use_portal() else {
        return html! {};
    };

    let navigate = |path: String| {
        let portal = portal.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            portal.navigate(&path);
            on_close.emit(());
        })
    };

    let toggle = |id: String| {
        let expanded = expanded.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let next = if expanded.as_deref() == Some(id.as_str()) {
                None
            } else {
                Some(id.clone())
            };
            expanded.set(next);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_close.emit(());
        })
    };

    let render_leaf = |item: &NavItem, path: &str| {
        let active = *current_path == path;
        html! {
            <li key={item.id.clone()}>
                <a href="#" class={classes!(active.then_some("active"))} onclick={navigate(path.to_string())}>
                    { item_label(item) }
                </a>
            </li>
        }
    };

    let navigation = portal.navigation();

    html! {
        <aside class="bg-base-300 min-h-full w-72 flex flex-col">
            <div class="p-6 flex justify-between items-center border-b border-base-100">
                <h2 class="text-xl font-bold">{ "UniPortal" }</h2>
                <button class="btn btn-ghost btn-sm btn-circle lg:hidden" onclick={close}>
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                </button>
            </div>
            <ul class="menu p-4 flex-1 overflow-y-auto">
                { for navigation.iter().map(|item| {
                    if let Some(path) = item.path() {
                        return render_leaf(item, path);
                    }
                    let open = expanded.as_deref() == Some(item.id.as_str());
                    html! {
                        <li key={item.id.clone()}>
                            <a href="#" class="justify-between font-semibold" onclick={toggle(item.id.clone())}>
                                { item_label(item) }
                                if open {
                                    <Icon icon_id={IconId::HeroiconsOutlineChevronDown} class="w-4 h-4" />
                                } else {
                                    <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="w-4 h-4" />
                                }
                            </a>
                            if open {
                                <ul>
                                    { for item.children().iter().filter_map(|child| {
                                        child.path().map(|path| render_leaf(child, path))
                                    }) }
                                </ul>
                            }
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}
