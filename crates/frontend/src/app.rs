use crate::domain::integrations::ui::settings::IntegrationSettings;
use crate::layout::project_context::context_from_location;
use crate::layout::SidePanelsService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Organization and project scope come from the page URL
    let (org, project) = context_from_location();
    provide_context(org);
    provide_context(project);

    // Side-panel visibility is an explicit handle shared via context
    provide_context(SidePanelsService::new());

    view! {
        <IntegrationSettings />
    }
}
