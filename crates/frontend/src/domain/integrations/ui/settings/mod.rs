pub mod components;
pub mod panels;

use self::components::{
    ConnectionSectionView, EmptyConnectionPrompt, IntegrationInstallationCard,
};
use self::panels::{SidePanelGitHubRepoLinker, SidePanelVercelProjectLinker};
use crate::domain::integrations::api;
use crate::layout::{OrganizationContext, ProjectContext, SidePanelsService};
use crate::shared::icons::icon;
use contracts::domain::integrations::aggregate::{Connection, Integration, IntegrationId};
use contracts::domain::integrations::reconcile::{
    filter_active_for_project, partition_by_provider, primary_vercel_integration,
    ProviderPartition,
};
use contracts::domain::integrations::requests::{AddConnectionRequest, DeleteConnectionRequest};
use contracts::enums::ProviderKind;
use contracts::shared::text::pluralize;
use leptos::prelude::*;
use thaw::*;

/// Integration settings page: the organization's Vercel and GitHub
/// installations, their project connections, and the add/delete actions.
#[component]
#[allow(non_snake_case)]
pub fn IntegrationSettings() -> impl IntoView {
    let org = use_context::<OrganizationContext>()
        .expect("OrganizationContext not found in context");
    let side_panels =
        use_context::<SidePanelsService>().expect("SidePanelsService not found in context");

    let (integrations, set_integrations) = signal::<Vec<Integration>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(slug) = org.slug.get_untracked() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_org_integrations(&slug).await {
                Ok(v) => {
                    set_integrations.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to fetch org integrations: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    let partition = Memo::new(move |_| partition_by_provider(&integrations.get()));

    // Add-connection dispatch: one panel-open signal per click
    let on_add_connection = Callback::new(move |(provider, integration_id): (
        ProviderKind,
        IntegrationId,
    )| {
        let request = AddConnectionRequest::new(provider, integration_id);
        match request.provider {
            ProviderKind::Vercel => side_panels.open_vercel_linker(request.integration_id),
            ProviderKind::GitHub => side_panels.open_github_linker(request.integration_id),
        }
    });

    // Delete-connection dispatch: fire the mutation without blocking the UI,
    // then pick up the new state with a fresh fetch
    let dispatch_delete = move |request: DeleteConnectionRequest| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = match request.provider {
                ProviderKind::Vercel => api::delete_vercel_connection(&request).await,
                ProviderKind::GitHub => api::delete_github_connection(&request).await,
            };
            if let Err(e) = result {
                log::error!("failed to delete {} connection: {e}", request.provider);
                set_error.set(Some(e));
            }
            fetch();
        });
    };

    let on_delete_connection = Callback::new(move |(provider, connection): (
        ProviderKind,
        Connection,
    )| {
        let org_slug = org.slug.get_untracked().unwrap_or_default();
        dispatch_delete(DeleteConnectionRequest::for_connection(
            provider,
            &connection,
            org_slug,
        ));
    });

    fetch();

    view! {
        <div class="settings-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Integrations"}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <VercelSection
                partition=partition
                on_add_connection=on_add_connection
                on_delete_connection=on_delete_connection
            />
            <Divider />
            <GitHubSection
                partition=partition
                on_add_connection=on_add_connection
                on_delete_connection=on_delete_connection
            />

            <SidePanelVercelProjectLinker />
            <SidePanelGitHubRepoLinker />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn VercelSection(
    partition: Memo<ProviderPartition>,
    on_add_connection: Callback<(ProviderKind, IntegrationId)>,
    on_delete_connection: Callback<(ProviderKind, Connection)>,
) -> impl IntoView {
    let project = use_context::<ProjectContext>().expect("ProjectContext not found in context");

    // Only integrations already connected to the current project are shown
    let active = Memo::new(move |_| {
        filter_active_for_project(&partition.get().vercel, project.project.get().as_ref())
    });

    // Vercel-side project count of the primary installation
    let (project_count, set_project_count) = signal(0usize);
    Effect::new(move |_| {
        let primary_id = primary_vercel_integration(&partition.get().vercel).map(|i| i.id);
        if let Some(id) = primary_id {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_vercel_project_count(id).await {
                    Ok(count) => set_project_count.set(count),
                    Err(e) => log::debug!("vercel project count unavailable: {e}"),
                }
            });
        }
    });

    let scope_note = move || {
        let count = project_count.get();
        primary_vercel_integration(&partition.get().vercel)
            .filter(|_| count > 0)
            .map(|primary| {
                let url = primary.configuration_url();
                view! {
                    <p class="section__note">
                        {format!(
                            "Your Vercel connection has access to {} Vercel {}. ",
                            count,
                            pluralize(count, "project"),
                        )}
                        "You can change the scope of the access "
                        <a href=url target="_blank">"here"</a>
                        {icon("external-link")}
                    </p>
                }
            })
    };

    view! {
        <section class="settings-section">
            <div class="settings-section__detail">
                <h2>{"Vercel Integration"}</h2>
                <p>{"Connect your Vercel teams to your organization."}</p>
            </div>
            <div class="settings-section__content">
                <p>
                    {"Environment variables are kept up to date in every Vercel project \
                      you assign to a project. Multiple Vercel projects can be linked \
                      to the same project."}
                </p>
                {move || active.get().into_iter().map(|integration| {
                    let integration_id = integration.id;
                    view! {
                        <div class="integration">
                            <IntegrationInstallationCard integration=integration.clone() />
                            <ConnectionSectionView
                                integration=integration
                                provider=ProviderKind::Vercel
                                on_delete_connection=on_delete_connection
                            />
                            <EmptyConnectionPrompt
                                on_click=Callback::new(move |_| {
                                    on_add_connection.run((ProviderKind::Vercel, integration_id));
                                })
                            />
                        </div>
                    }
                }).collect_view()}
                {scope_note}
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn GitHubSection(
    partition: Memo<ProviderPartition>,
    on_add_connection: Callback<(ProviderKind, IntegrationId)>,
    on_delete_connection: Callback<(ProviderKind, Connection)>,
) -> impl IntoView {
    view! {
        <section class="settings-section">
            <div class="settings-section__detail">
                <h2>{"GitHub Connections"}</h2>
                <p>{"Connect any of your GitHub repositories to a project."}</p>
            </div>
            <div class="settings-section__content">
                <p>
                    {"The GitHub app watches the connected repository for file changes, \
                      branch changes and pull request activity."}
                </p>
                {move || partition.get().github.into_iter().map(|integration| {
                    let integration_id = integration.id;
                    view! {
                        <div class="integration">
                            <IntegrationInstallationCard integration=integration.clone() />
                            <ConnectionSectionView
                                integration=integration
                                provider=ProviderKind::GitHub
                                on_delete_connection=on_delete_connection
                            />
                            <EmptyConnectionPrompt
                                on_click=Callback::new(move |_| {
                                    on_add_connection.run((ProviderKind::GitHub, integration_id));
                                })
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
