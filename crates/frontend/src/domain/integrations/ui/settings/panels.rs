//! Side-panel shells for the provider linking flows. The linking flow
//! itself (project pickers, repo search) runs inside the provider panel;
//! this layer only owns the open/close chrome driven by
//! [`SidePanelsService`].

use crate::layout::SidePanelsService;
use crate::shared::icons::icon;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Side panel for linking Vercel projects to the scoped integration
#[component]
#[allow(non_snake_case)]
pub fn SidePanelVercelProjectLinker() -> impl IntoView {
    let side_panels =
        use_context::<SidePanelsService>().expect("SidePanelsService not provided in context");

    view! {
        {move || {
            if side_panels.vercel_connections_open.get() {
                let scope = side_panels
                    .vercel_connections_integration_id
                    .get()
                    .map(|id| id.as_string())
                    .unwrap_or_default();
                view! {
                    <div
                        class="side-panel-overlay"
                        on:click=move |_| side_panels.close_vercel_linker()
                    >
                        <aside
                            class="side-panel"
                            on:click=|e| e.stop_propagation()
                        >
                            <header class="side-panel__header">
                                <h2>{"Add Vercel project connection"}</h2>
                                <button
                                    class="side-panel__close"
                                    on:click=move |_| side_panels.close_vercel_linker()
                                >
                                    {icon("close")}
                                </button>
                            </header>
                            <div class="side-panel__body" data-integration-id=scope>
                                <p>{"Choose the Vercel project to link to this project."}</p>
                            </div>
                        </aside>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

/// Side panel for linking GitHub repositories to the scoped integration
#[component]
#[allow(non_snake_case)]
pub fn SidePanelGitHubRepoLinker() -> impl IntoView {
    let side_panels =
        use_context::<SidePanelsService>().expect("SidePanelsService not provided in context");

    view! {
        {move || {
            if side_panels.github_connections_open.get() {
                let scope = side_panels
                    .github_connections_integration_id
                    .get()
                    .map(|id| id.as_string())
                    .unwrap_or_default();
                view! {
                    <div
                        class="side-panel-overlay"
                        on:click=move |_| side_panels.close_github_linker()
                    >
                        <aside
                            class="side-panel"
                            on:click=|e| e.stop_propagation()
                        >
                            <header class="side-panel__header">
                                <h2>{"Add GitHub repository connection"}</h2>
                                <button
                                    class="side-panel__close"
                                    on:click=move |_| side_panels.close_github_linker()
                                >
                                    {icon("close")}
                                </button>
                            </header>
                            <div class="side-panel__body" data-integration-id=scope>
                                <p>{"Choose the GitHub repository to link to a project."}</p>
                            </div>
                        </aside>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
