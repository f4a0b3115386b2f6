use contracts::domain::integrations::aggregate::IntegrationId;
use leptos::prelude::*;

/// Centralized visibility state for the add-connection side panels.
/// Passed through Leptos context as an explicit handle; the panels and
/// the settings page never share a module-level global.
#[derive(Clone, Copy)]
pub struct SidePanelsService {
    pub vercel_connections_open: RwSignal<bool>,
    pub vercel_connections_integration_id: RwSignal<Option<IntegrationId>>,
    pub github_connections_open: RwSignal<bool>,
    pub github_connections_integration_id: RwSignal<Option<IntegrationId>>,
}

impl SidePanelsService {
    pub fn new() -> Self {
        Self {
            vercel_connections_open: RwSignal::new(false),
            vercel_connections_integration_id: RwSignal::new(None),
            github_connections_open: RwSignal::new(false),
            github_connections_integration_id: RwSignal::new(None),
        }
    }

    /// Open the Vercel project linker scoped to one integration
    pub fn open_vercel_linker(&self, integration_id: IntegrationId) {
        self.vercel_connections_integration_id
            .set(Some(integration_id));
        self.vercel_connections_open.set(true);
    }

    pub fn close_vercel_linker(&self) {
        self.vercel_connections_open.set(false);
    }

    /// Open the GitHub repository linker scoped to one integration
    pub fn open_github_linker(&self, integration_id: IntegrationId) {
        self.github_connections_integration_id
            .set(Some(integration_id));
        self.github_connections_open.set(true);
    }

    pub fn close_github_linker(&self) {
        self.github_connections_open.set(false);
    }
}

impl Default for SidePanelsService {
    fn default() -> Self {
        Self::new()
    }
}
