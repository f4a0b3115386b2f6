//! Mutation and panel-open payloads built by the settings page.
//! Each user intent maps to exactly one of these values.

use super::aggregate::{Connection, ConnectionId, IntegrationId};
use crate::enums::ProviderKind;
use serde::{Deserialize, Serialize};

/// Intent to open the provider's linking side panel for one integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddConnectionRequest {
    pub provider: ProviderKind,
    pub integration_id: IntegrationId,
}

impl AddConnectionRequest {
    pub fn new(provider: ProviderKind, integration_id: IntegrationId) -> Self {
        Self {
            provider,
            integration_id,
        }
    }
}

/// Payload of the delete-connection mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConnectionRequest {
    pub provider: ProviderKind,
    pub connection_id: ConnectionId,
    pub organization_integration_id: IntegrationId,
    pub org_slug: String,
}

impl DeleteConnectionRequest {
    /// Build the payload from the connection itself: the connection id and
    /// the owning integration id always travel together.
    pub fn for_connection(
        provider: ProviderKind,
        connection: &Connection,
        org_slug: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            connection_id: connection.id,
            organization_integration_id: connection.organization_integration_id,
            org_slug: org_slug.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::integrations::aggregate::ProjectRef;
    use chrono::Utc;

    #[test]
    fn test_add_request_scopes_panel_to_integration() {
        let integration_id = IntegrationId::new_v4();
        let request = AddConnectionRequest::new(ProviderKind::Vercel, integration_id);
        assert_eq!(request.provider, ProviderKind::Vercel);
        assert_eq!(request.integration_id, integration_id);
    }

    #[test]
    fn test_delete_request_carries_connection_and_owner_ids() {
        let owner = IntegrationId::new_v4();
        let connection = Connection {
            id: ConnectionId::new_v4(),
            organization_integration_id: owner,
            project_ref: ProjectRef::new("p1"),
            foreign_project_id: "prj_abc".to_string(),
            inserted_at: Utc::now(),
        };

        let request =
            DeleteConnectionRequest::for_connection(ProviderKind::GitHub, &connection, "org-1");
        assert_eq!(request.provider, ProviderKind::GitHub);
        assert_eq!(request.connection_id, connection.id);
        assert_eq!(request.organization_integration_id, owner);
        assert_eq!(request.org_slug, "org-1");
    }
}
