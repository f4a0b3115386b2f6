use crate::domain::common::AggregateId;
use crate::enums::ProviderKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID types
// ============================================================================

/// Identifier of an installed organization integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegrationId(pub Uuid);

impl IntegrationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for IntegrationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IntegrationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Identifier of a project connection within an integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ConnectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ConnectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Reference of a platform project, opaque and compared verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRef(pub String);

impl ProjectRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Connection
// ============================================================================

/// A link between a platform project and a remote provider project.
/// Owned exclusively by its parent [`Integration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    /// Back-reference to the owning organization integration
    pub organization_integration_id: IntegrationId,
    /// The platform project this connection targets
    pub project_ref: ProjectRef,
    /// Provider-side project identifier (Vercel project id / GitHub repo id)
    pub foreign_project_id: String,
    pub inserted_at: DateTime<Utc>,
}

// ============================================================================
// Provider metadata
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VercelAccountType {
    Team,
    Personal,
}

/// Vercel account info attached to an installed integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VercelAccount {
    pub name: String,
    pub account_type: VercelAccountType,
    pub team_id: Option<String>,
    /// Avatar hash as reported by Vercel; teams may not have one
    pub avatar: Option<String>,
}

impl VercelAccount {
    /// Avatar endpoint URL. Teams without an avatar hash are resolved
    /// through the team-id endpoint instead.
    pub fn avatar_url(&self) -> String {
        match (&self.avatar, self.account_type) {
            (None, VercelAccountType::Team) => format!(
                "https://vercel.com/api/www/avatar?teamId={}&s=48",
                self.team_id.as_deref().unwrap_or_default()
            ),
            (avatar, _) => format!(
                "https://vercel.com/api/www/avatar/{}?s=48",
                avatar.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Provider-specific payload of an installed integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum IntegrationMetadata {
    #[serde(rename = "vercel")]
    Vercel { account: VercelAccount },
    #[serde(rename = "github")]
    GitHub {
        installation_id: i64,
        account_login: String,
    },
}

// ============================================================================
// Integration
// ============================================================================

/// An integration installed on the organization, together with its
/// project connections. Fetched read-only from the platform API and
/// never mutated locally; changes go through mutation requests and
/// arrive back via a fresh fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: IntegrationId,
    pub provider: ProviderKind,
    pub metadata: IntegrationMetadata,
    pub connections: Vec<Connection>,
    pub inserted_at: DateTime<Utc>,
}

impl Integration {
    /// Always the live length of the connection list, never cached
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Provider dashboard URL where the installation scope is configured
    pub fn configuration_url(&self) -> String {
        match &self.metadata {
            IntegrationMetadata::Vercel { account } => match account.account_type {
                VercelAccountType::Team => format!(
                    "https://vercel.com/dashboard/{}/integrations",
                    account.team_id.as_deref().unwrap_or_default()
                ),
                VercelAccountType::Personal => {
                    "https://vercel.com/dashboard/integrations".to_string()
                }
            },
            IntegrationMetadata::GitHub {
                installation_id, ..
            } => format!(
                "https://github.com/settings/installations/{}",
                installation_id
            ),
        }
    }

    /// Account label shown on the installation card
    pub fn account_label(&self) -> &str {
        match &self.metadata {
            IntegrationMetadata::Vercel { account } => &account.name,
            IntegrationMetadata::GitHub { account_login, .. } => account_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_account(avatar: Option<&str>) -> VercelAccount {
        VercelAccount {
            name: "acme".to_string(),
            account_type: VercelAccountType::Team,
            team_id: Some("team_123".to_string()),
            avatar: avatar.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_avatar_url_team_without_hash_uses_team_endpoint() {
        assert_eq!(
            team_account(None).avatar_url(),
            "https://vercel.com/api/www/avatar?teamId=team_123&s=48"
        );
    }

    #[test]
    fn test_avatar_url_with_hash_uses_hash_endpoint() {
        assert_eq!(
            team_account(Some("abc123")).avatar_url(),
            "https://vercel.com/api/www/avatar/abc123?s=48"
        );
        let personal = VercelAccount {
            name: "dev".to_string(),
            account_type: VercelAccountType::Personal,
            team_id: None,
            avatar: Some("def456".to_string()),
        };
        assert_eq!(
            personal.avatar_url(),
            "https://vercel.com/api/www/avatar/def456?s=48"
        );
    }

    #[test]
    fn test_integration_wire_format() {
        let json = r#"{
            "id": "0a0f5f49-3a3b-4c7e-9a39-111111111111",
            "provider": "vercel",
            "metadata": {
                "provider": "vercel",
                "account": {
                    "name": "acme",
                    "account_type": "Team",
                    "team_id": "team_123",
                    "avatar": null
                }
            },
            "connections": [
                {
                    "id": "0a0f5f49-3a3b-4c7e-9a39-222222222222",
                    "organization_integration_id": "0a0f5f49-3a3b-4c7e-9a39-111111111111",
                    "project_ref": "p1",
                    "foreign_project_id": "prj_abc",
                    "inserted_at": "2024-03-15T14:02:26Z"
                }
            ],
            "inserted_at": "2024-03-01T09:00:00Z"
        }"#;
        let integration: Integration = serde_json::from_str(json).unwrap();
        assert_eq!(integration.provider, ProviderKind::Vercel);
        assert_eq!(integration.connection_count(), 1);
        assert_eq!(
            integration.connections[0].organization_integration_id,
            integration.id
        );
        assert_eq!(integration.connections[0].project_ref, ProjectRef::new("p1"));
    }

    #[test]
    fn test_configuration_url_per_provider() {
        let vercel = Integration {
            id: IntegrationId::new_v4(),
            provider: ProviderKind::Vercel,
            metadata: IntegrationMetadata::Vercel {
                account: team_account(None),
            },
            connections: vec![],
            inserted_at: Utc::now(),
        };
        assert_eq!(
            vercel.configuration_url(),
            "https://vercel.com/dashboard/team_123/integrations"
        );

        let github = Integration {
            id: IntegrationId::new_v4(),
            provider: ProviderKind::GitHub,
            metadata: IntegrationMetadata::GitHub {
                installation_id: 424242,
                account_login: "octo-org".to_string(),
            },
            connections: vec![],
            inserted_at: Utc::now(),
        };
        assert_eq!(
            github.configuration_url(),
            "https://github.com/settings/installations/424242"
        );
        assert_eq!(github.account_label(), "octo-org");
    }
}
