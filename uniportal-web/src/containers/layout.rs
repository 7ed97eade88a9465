use crate::components::{AssistantFab, PersonaControls};
use crate::containers::header::Header;
use crate::containers::page_content::PageContent;
use crate::containers::sidebar::Sidebar;
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Authenticated shell: drawer sidebar, header, page body and the floating
/// persona and assistant controls.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |()| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            if let Err(err) = html_element.set_attribute("data-theme", "corporate") {
                log::debug!("could not set theme: {err:?}");
            }
        }
        || {}
    });

    let on_menu = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |()| sidebar_open.set(true))
    };
    let on_close = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |()| sidebar_open.set(false))
    };
    let on_overlay = {
        let on_close = on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 drawer lg:drawer-open">
            <input id="portal-drawer" type="checkbox" class="drawer-toggle" checked={*sidebar_open} />
            <div class="drawer-content flex flex-col">
                <Header {on_menu} />
                <main class={classes!("flex-grow", "p-4", "lg:p-8", "transition-all", "duration-300")}>
                    <PageContent>
                        { props.children.clone() }
                    </PageContent>
                </main>
                <PersonaControls />
                <AssistantFab />
            </div>
            <div class="drawer-side z-[1000]">
                <label for="portal-drawer" aria-label="Close navigation" class="drawer-overlay" onclick={on_overlay}></label>
                <Sidebar {on_close} />
            </div>
        </div>
    }
}
