//! Pure reconciliation of the installed-integration snapshot into
//! per-provider render plans. No I/O and no ambient state: every
//! function here is a total function over the arguments it is given.

use super::aggregate::{ConnectionId, Integration, ProjectRef};
use crate::enums::ProviderKind;
use crate::shared::text::pluralize;

/// Installed integrations split by provider, original relative order kept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderPartition {
    pub vercel: Vec<Integration>,
    pub github: Vec<Integration>,
}

/// Split the flat installation list by provider kind.
/// The two parts are disjoint and preserve input order.
pub fn partition_by_provider(integrations: &[Integration]) -> ProviderPartition {
    let mut partition = ProviderPartition::default();
    for integration in integrations {
        match integration.provider {
            ProviderKind::Vercel => partition.vercel.push(integration.clone()),
            ProviderKind::GitHub => partition.github.push(integration.clone()),
        }
    }
    partition
}

/// Narrow a provider's integrations to those with at least one connection
/// targeting the current project. Without a project context nothing is
/// considered active.
pub fn filter_active_for_project(
    integrations: &[Integration],
    project_ref: Option<&ProjectRef>,
) -> Vec<Integration> {
    let Some(project_ref) = project_ref else {
        return Vec::new();
    };
    integrations
        .iter()
        .filter(|integration| {
            integration
                .connections
                .iter()
                .any(|connection| connection.project_ref == *project_ref)
        })
        .cloned()
        .collect()
}

/// The one Vercel installation the page works with.
///
/// Policy: only a single Vercel integration per organization is supported
/// for now, so the first installed one wins. Revisit when multiple
/// installations per organization are allowed.
pub fn primary_vercel_integration(vercel_integrations: &[Integration]) -> Option<&Integration> {
    vercel_integrations.first()
}

/// Render plan for one integration's connection block
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionSection {
    /// No connections yet; the heading still carries the zero count
    Empty { heading: String },
    /// One list item per connection, in snapshot order
    Populated {
        heading: String,
        connection_ids: Vec<ConnectionId>,
    },
}

impl ConnectionSection {
    pub fn heading(&self) -> &str {
        match self {
            ConnectionSection::Empty { heading } => heading,
            ConnectionSection::Populated { heading, .. } => heading,
        }
    }
}

/// Decide between the connection list and the empty-state prompt for
/// one integration. Always recomputed from the live connection list.
pub fn present_connections(integration: &Integration) -> ConnectionSection {
    let count = integration.connection_count();
    let heading = connection_heading(count);
    if count > 0 {
        ConnectionSection::Populated {
            heading,
            connection_ids: integration.connections.iter().map(|c| c.id).collect(),
        }
    } else {
        ConnectionSection::Empty { heading }
    }
}

/// Header label such as "1 project connection" / "3 project connections"
pub fn connection_heading(count: usize) -> String {
    format!("{} project {}", count, pluralize(count, "connection"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::integrations::aggregate::{
        Connection, IntegrationId, IntegrationMetadata, VercelAccount, VercelAccountType,
    };
    use chrono::Utc;

    fn connection(owner: IntegrationId, project_ref: &str) -> Connection {
        Connection {
            id: ConnectionId::new_v4(),
            organization_integration_id: owner,
            project_ref: ProjectRef::new(project_ref),
            foreign_project_id: "prj_abc".to_string(),
            inserted_at: Utc::now(),
        }
    }

    fn integration(provider: ProviderKind, project_refs: &[&str]) -> Integration {
        let id = IntegrationId::new_v4();
        let metadata = match provider {
            ProviderKind::Vercel => IntegrationMetadata::Vercel {
                account: VercelAccount {
                    name: "acme".to_string(),
                    account_type: VercelAccountType::Team,
                    team_id: Some("team_123".to_string()),
                    avatar: None,
                },
            },
            ProviderKind::GitHub => IntegrationMetadata::GitHub {
                installation_id: 1,
                account_login: "octo-org".to_string(),
            },
        };
        Integration {
            id,
            provider,
            metadata,
            connections: project_refs.iter().map(|r| connection(id, r)).collect(),
            inserted_at: Utc::now(),
        }
    }

    #[test]
    fn test_partition_is_disjoint_and_order_preserving() {
        let input = vec![
            integration(ProviderKind::GitHub, &[]),
            integration(ProviderKind::Vercel, &["p1"]),
            integration(ProviderKind::GitHub, &["p2"]),
            integration(ProviderKind::Vercel, &[]),
        ];
        let partition = partition_by_provider(&input);

        assert_eq!(partition.vercel.len(), 2);
        assert_eq!(partition.github.len(), 2);
        assert_eq!(partition.vercel[0].id, input[1].id);
        assert_eq!(partition.vercel[1].id, input[3].id);
        assert_eq!(partition.github[0].id, input[0].id);
        assert_eq!(partition.github[1].id, input[2].id);

        // Interleaving the parts back by original position reconstructs the input
        let mut vercel = partition.vercel.iter();
        let mut github = partition.github.iter();
        let rebuilt: Vec<_> = input
            .iter()
            .map(|i| match i.provider {
                ProviderKind::Vercel => vercel.next().unwrap().id,
                ProviderKind::GitHub => github.next().unwrap().id,
            })
            .collect();
        let original: Vec<_> = input.iter().map(|i| i.id).collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_partition_empty_input() {
        assert_eq!(partition_by_provider(&[]), ProviderPartition::default());
    }

    #[test]
    fn test_filter_without_project_context_is_empty() {
        let input = vec![integration(ProviderKind::Vercel, &["p1", "p2"])];
        assert!(filter_active_for_project(&input, None).is_empty());
    }

    #[test]
    fn test_filter_matches_connection_project_ref() {
        let active = integration(ProviderKind::Vercel, &["p1"]);
        let other = integration(ProviderKind::Vercel, &["p3"]);
        let input = vec![other.clone(), active.clone()];

        let current = ProjectRef::new("p1");
        let filtered = filter_active_for_project(&input, Some(&current));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, active.id);

        let elsewhere = ProjectRef::new("p2");
        assert!(filter_active_for_project(&input, Some(&elsewhere)).is_empty());
    }

    #[test]
    fn test_primary_vercel_integration_is_first() {
        assert!(primary_vercel_integration(&[]).is_none());
        let a = integration(ProviderKind::Vercel, &[]);
        let b = integration(ProviderKind::Vercel, &[]);
        let list = vec![a.clone(), b];
        assert_eq!(primary_vercel_integration(&list).unwrap().id, a.id);
    }

    #[test]
    fn test_present_connections_populated() {
        let single = integration(ProviderKind::Vercel, &["p1"]);
        match present_connections(&single) {
            ConnectionSection::Populated {
                heading,
                connection_ids,
            } => {
                assert_eq!(heading, "1 project connection");
                assert_eq!(connection_ids, vec![single.connections[0].id]);
            }
            other => panic!("expected populated section, got {:?}", other),
        }

        let many = integration(ProviderKind::GitHub, &["p1", "p2", "p3"]);
        let section = present_connections(&many);
        assert_eq!(section.heading(), "3 project connections");
        match section {
            ConnectionSection::Populated { connection_ids, .. } => {
                // The plan lists ids in snapshot order; rendering follows it
                let expected: Vec<_> = many.connections.iter().map(|c| c.id).collect();
                assert_eq!(connection_ids, expected);
            }
            other => panic!("expected populated section, got {:?}", other),
        }
    }

    #[test]
    fn test_present_connections_empty_state() {
        let empty = integration(ProviderKind::GitHub, &[]);
        match present_connections(&empty) {
            ConnectionSection::Empty { heading } => {
                assert_eq!(heading, "0 project connections");
            }
            other => panic!("expected empty section, got {:?}", other),
        }
    }
}
