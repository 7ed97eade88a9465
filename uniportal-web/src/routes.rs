use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::models::{Page, View};
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Component registered for an authenticated page.
fn page_view(page: Page) -> Html {
    match page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Profile => html! { <ProfilePage /> },
        Page::Documents => html! { <DocumentsPage /> },
        Page::Calendar => html! { <CalendarPage /> },
        Page::Progress => html! { <ProgressPage /> },
        Page::Map => html! { <MapPage /> },
        Page::Timetable => html! { <TimetablePage /> },
        Page::Inbox => html! { <InboxPage /> },
        Page::Tasks => html! { <TasksPage /> },
        Page::Help => html! { <HelpPage /> },
        Page::Admin => html! { <AdminPage /> },
        Page::Housing => html! { <HousingPage /> },
        Page::Life => html! { <LifePage /> },
        Page::It => html! { <ItPage /> },
        Page::Visa => html! { <VisaPage /> },
    }
}

/// Switches on the resolved view. Public views render bare; authenticated
/// pages and the not-found view render inside the [`Layout`] shell.
#[function_component(MainView)]
pub fn main_view() -> Html {
    let view = use_selector(|state: &AppState| state.view);
    log::debug!("Switching to view: {:?}", *view);

    match *view {
        View::Landing => html! { <LandingPage /> },
        View::Login => html! { <LoginPage /> },
        View::Page(page) => html! {
            <Layout>
                { page_view(page) }
            </Layout>
        },
        View::NotFound => html! {
            <Layout>
                <NotFoundPage />
            </Layout>
        },
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::app::PortalContext;
    use shared::config::PortalConfig;
    use shared::store::{MemoryLocation, MemoryStorage, Portal};
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;
    use yewdux::YewduxRoot;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(Root)]
    fn root() -> Html {
        let portal = Portal::new(
            PortalConfig::default(),
            MemoryLocation::new("/"),
            MemoryStorage::new(),
        );
        html! {
            <YewduxRoot>
                <ContextProvider<PortalContext> context={PortalContext(portal)}>
                    <MainView />
                </ContextProvider<PortalContext>>
            </YewduxRoot>
        }
    }

    #[wasm_bindgen_test]
    async fn test_default_view_is_landing() {
        let rendered = ServerRenderer::<Root>::new().render().await;
        assert!(rendered.contains("Access Student Portal"));
    }
}
