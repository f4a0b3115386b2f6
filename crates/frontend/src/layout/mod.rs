pub mod project_context;
pub mod side_panels;

pub use project_context::{OrganizationContext, ProjectContext};
pub use side_panels::SidePanelsService;
