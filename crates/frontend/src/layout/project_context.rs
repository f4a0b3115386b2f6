use contracts::domain::integrations::aggregate::ProjectRef;
use leptos::prelude::*;

/// Currently selected project, if any. The settings page only reads it;
/// selection itself belongs to the surrounding layout.
#[derive(Clone, Copy)]
pub struct ProjectContext {
    pub project: RwSignal<Option<ProjectRef>>,
}

impl ProjectContext {
    pub fn new(project: Option<ProjectRef>) -> Self {
        Self {
            project: RwSignal::new(project),
        }
    }
}

/// Organization the settings page is scoped to
#[derive(Clone, Copy)]
pub struct OrganizationContext {
    pub slug: RwSignal<Option<String>>,
}

impl OrganizationContext {
    pub fn new(slug: Option<String>) -> Self {
        Self {
            slug: RwSignal::new(slug),
        }
    }
}

/// Read `org` and `project` out of the window query string,
/// e.g. `?org=acme&project=p1`.
pub fn context_from_location() -> (OrganizationContext, ProjectContext) {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    let mut org = None;
    let mut project = None;
    for pair in search.trim_start_matches('?').split('&') {
        match pair.split_once('=') {
            Some(("org", value)) if !value.is_empty() => {
                org = urlencoding::decode(value).ok().map(|v| v.into_owned());
            }
            Some(("project", value)) if !value.is_empty() => {
                project = urlencoding::decode(value)
                    .ok()
                    .map(|v| ProjectRef::new(v.into_owned()));
            }
            _ => {}
        }
    }

    (OrganizationContext::new(org), ProjectContext::new(project))
}
