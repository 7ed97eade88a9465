use crate::config::FrontendConfig;
use crate::host::{BrowserStorage, HashLocation};
use crate::models::app_state::AppState;
use crate::routes::MainView;
use shared::store::Portal;
use std::ops::Deref;
use std::rc::Rc;
use yew::{
    Callback, ContextProvider, Html, MouseEvent, function_component, hook, html, use_context,
    use_effect_with, use_memo,
};
use yewdux::prelude::use_dispatch;

/// Shared handle to the portal, provided to every component below [`App`].
#[derive(Clone, Debug)]
pub struct PortalContext(pub Rc<Portal>);

impl PartialEq for PortalContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for PortalContext {
    type Target = Portal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PortalContext {
    /// Click handler that navigates to `path` instead of following the link.
    pub fn navigate_to(&self, path: impl Into<String>) -> Callback<MouseEvent> {
        let portal = Rc::clone(&self.0);
        let path = path.into();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            portal.navigate(&path);
        })
    }
}

/// The portal, or `None` outside of [`App`].
#[hook]
pub fn use_portal() -> Option<PortalContext> {
    use_context::<PortalContext>()
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    let portal = {
        let dispatch = dispatch.clone();
        use_memo((), move |()| {
            let config = FrontendConfig::new().portal_config();
            let portal = Portal::new(config, Rc::new(HashLocation::new()), Rc::new(BrowserStorage));
            // Seeded before the first frame so a restored session never
            // shows the landing page.
            dispatch.set(AppState::from(portal.snapshot()));
            portal
        })
    };

    {
        let portal = Rc::clone(&portal);
        use_effect_with((), move |()| {
            let subscription = {
                let dispatch = dispatch.clone();
                portal.subscribe(move |snapshot| dispatch.set(AppState::from(snapshot.clone())))
            };
            dispatch.set(AppState::from(portal.snapshot()));
            move || drop(subscription)
        });
    }

    html! {
        <ContextProvider<PortalContext> context={PortalContext(Rc::clone(&portal))}>
            <MainView />
        </ContextProvider<PortalContext>>
    }
}
