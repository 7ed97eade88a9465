use crate::components::widgets::{
    DailyScheduleWidget, DeadlinesWidget, FacultyNewsWidget, LinkRecommendations,
    NotificationsWidget, QuickLinksWidget, VisaWidget,
};
use crate::components::{OnboardingChecklist, TutorialOverlay};
use crate::models::app_state::AppState;
use shared::content::personalization::dashboard_subtitle;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let persona = use_selector(|state: &AppState| state.persona);
    let user_state = use_selector(|state: &AppState| state.session.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    html! {
        <div class="space-y-6">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">{ format!("Welcome back, {}.", user.first_name()) }</h1>
                <p class="text-base-content/60">{ dashboard_subtitle(&persona) }</p>
            </div>

            <OnboardingChecklist />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                // Priority widgets
                <NotificationsWidget />
                <DailyScheduleWidget />
                <DeadlinesWidget />
                <QuickLinksWidget />

                // Personalised widgets
                <FacultyNewsWidget />
                <VisaWidget />
                <LinkRecommendations />
            </div>

            <TutorialOverlay />
        </div>
    }
}
