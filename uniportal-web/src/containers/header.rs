use crate::app::use_portal;
use crate::components::GlobalSearch;
use crate::models::app_state::AppState;
use shared::models::Page;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Opens the navigation drawer on small screens.
    pub on_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user_state = use_selector(|state: &AppState| state.session.user.clone());
    let Some(portal) = use_portal() else {
        return html! {};
    };
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let on_menu = {
        let on_menu = props.on_menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_menu.emit(());
        })
    };

    let on_logout = {
        let portal = portal.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            portal.logout();
        })
    };

    html! {
        <nav class="navbar bg-base-100 border-b border-base-300 sticky top-0 z-[900] px-4 lg:px-8 gap-4">
            <div class="flex-1 flex items-center gap-4">
                <button class="btn btn-ghost btn-square lg:hidden" onclick={on_menu} aria-label="Open navigation">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                </button>
                <GlobalSearch />
            </div>
            <div class="flex-none flex items-center gap-4">
                <button class="btn btn-ghost h-auto py-1" onclick={portal.navigate_to(Page::Profile.path())}>
                    <div class="text-right hidden md:block min-w-[100px]">
                        <div class="font-semibold">{ &user.name }</div>
                        <div class="text-xs text-base-content/60">{ &user.id }</div>
                    </div>
                    <div class="avatar placeholder">
                        <div class="bg-primary/20 text-primary rounded-full w-10">
                            <span class="font-bold">{ &user.avatar }</span>
                        </div>
                    </div>
                </button>
                <button class="btn btn-ghost btn-circle text-error" onclick={on_logout} title="Log out">
                    <Icon icon_id={IconId::HeroiconsOutlinePower} class="w-6 h-6" />
                </button>
            </div>
        </nav>
    }
}
