use crate::shared::icons::icon;
use contracts::domain::integrations::aggregate::{
    Connection, Integration, IntegrationMetadata,
};
use contracts::domain::integrations::reconcile::{present_connections, ConnectionSection};
use contracts::enums::ProviderKind;
use leptos::prelude::*;
use thaw::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Card describing one installed integration: provider, account, install date
#[component]
#[allow(non_snake_case)]
pub fn IntegrationInstallationCard(integration: Integration) -> impl IntoView {
    let provider_name = integration.provider.display_name();
    let account_label = integration.account_label().to_string();
    let installed_on = format_timestamp(integration.inserted_at);
    let avatar = match &integration.metadata {
        IntegrationMetadata::Vercel { account } => Some(account.avatar_url()),
        IntegrationMetadata::GitHub { .. } => None,
    };
    let configuration_url = integration.configuration_url();

    view! {
        <div class="installation-card">
            {avatar.map(|src| view! {
                <img class="installation-card__avatar" src=src alt="account avatar" />
            })}
            <div class="installation-card__body">
                <span class="installation-card__title">
                    {format!("{} integration connection", provider_name)}
                </span>
                <span class="installation-card__subtitle">
                    {format!("Installed for {} on {}", account_label, installed_on)}
                </span>
            </div>
            <a
                class="installation-card__configure"
                href=configuration_url
                target="_blank"
            >
                "Configure"
                {icon("external-link")}
            </a>
        </div>
    }
}

/// Connection block of one integration: the count heading plus either
/// the connection list or the empty-state prompt text
#[component]
#[allow(non_snake_case)]
pub fn ConnectionSectionView(
    integration: Integration,
    provider: ProviderKind,
    on_delete_connection: Callback<(ProviderKind, Connection)>,
) -> impl IntoView {
    let section = present_connections(&integration);

    match section {
        ConnectionSection::Populated {
            heading,
            connection_ids,
        } => {
            // Render in the order the plan dictates
            let connections: Vec<Connection> = connection_ids
                .into_iter()
                .filter_map(|id| {
                    integration
                        .connections
                        .iter()
                        .find(|c| c.id == id)
                        .cloned()
                })
                .collect();
            view! {
                <div class="connection-section">
                    <ConnectionHeading
                        title=heading
                        subtitle=format!("Repository connections for {}", provider.display_name())
                    />
                    <ul class="connection-section__list">
                        {connections.into_iter().map(|connection| view! {
                            <ConnectionItem
                                connection=connection
                                provider=provider
                                on_delete_connection=on_delete_connection
                            />
                        }).collect_view()}
                    </ul>
                </div>
            }
            .into_any()
        }
        ConnectionSection::Empty { heading } => view! {
            <div class="connection-section connection-section--empty">
                <ConnectionHeading
                    title=heading
                    subtitle=format!("Repository connections for {}", provider.display_name())
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ConnectionHeading(title: String, subtitle: String) -> impl IntoView {
    view! {
        <div class="connection-heading">
            <h3 class="connection-heading__title">{title}</h3>
            <span class="connection-heading__subtitle">{subtitle}</span>
        </div>
    }
}

/// One project connection row with its delete action
#[component]
#[allow(non_snake_case)]
pub fn ConnectionItem(
    connection: Connection,
    provider: ProviderKind,
    on_delete_connection: Callback<(ProviderKind, Connection)>,
) -> impl IntoView {
    let connected_on = format_timestamp(connection.inserted_at);
    let project_ref = connection.project_ref.as_str().to_string();
    let foreign_project_id = connection.foreign_project_id.clone();
    let connection_for_delete = connection.clone();

    view! {
        <li class="connection-item">
            <div class="connection-item__body">
                <span class="connection-item__project">{project_ref}</span>
                <span class="connection-item__foreign">{foreign_project_id}</span>
                <span class="connection-item__date">{format!("Connected on {}", connected_on)}</span>
            </div>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    on_delete_connection.run((provider, connection_for_delete.clone()));
                }
            >
                {icon("delete")}
                " Remove"
            </Button>
        </li>
    }
}

/// Prompt at the end of each integration block for linking another project
#[component]
#[allow(non_snake_case)]
pub fn EmptyConnectionPrompt(on_click: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-connection">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_click.run(())
            >
                {icon("plus")}
                " Add new project connection"
            </Button>
        </div>
    }
}
