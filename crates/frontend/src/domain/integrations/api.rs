//! Clients for the platform integration API. Failure handling stays with
//! the caller: every function surfaces errors as `Err(String)` and never
//! retries.

use crate::shared::api_utils::api_url;
use contracts::domain::common::AggregateId;
use contracts::domain::integrations::aggregate::{Integration, IntegrationId};
use contracts::domain::integrations::requests::DeleteConnectionRequest;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch the organization's installed integrations, connections included.
/// The list may be stale between refreshes; the page re-fetches after
/// every mutation instead of patching it locally.
pub async fn fetch_org_integrations(org_slug: &str) -> Result<Vec<Integration>, String> {
    let url = api_url(&format!(
        "/api/integrations?orgSlug={}",
        urlencoding::encode(org_slug)
    ));
    let text = request_text("GET", &url, None).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

#[derive(Debug, Deserialize)]
struct VercelProject {
    #[allow(dead_code)]
    id: String,
}

/// Number of Vercel projects the installation has access to
pub async fn fetch_vercel_project_count(
    integration_id: IntegrationId,
) -> Result<usize, String> {
    let url = api_url(&format!(
        "/api/integrations/vercel/{}/projects",
        integration_id.as_string()
    ));
    let text = request_text("GET", &url, None).await?;
    let projects: Vec<VercelProject> =
        serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(projects.len())
}

/// Remove a Vercel project connection
pub async fn delete_vercel_connection(request: &DeleteConnectionRequest) -> Result<(), String> {
    let url = api_url(&format!(
        "/api/integrations/vercel/connections/{}",
        request.connection_id.as_string()
    ));
    let body = serde_json::to_string(request).map_err(|e| format!("{e}"))?;
    request_text("DELETE", &url, Some(&body)).await?;
    Ok(())
}

/// Remove a GitHub repository connection
pub async fn delete_github_connection(request: &DeleteConnectionRequest) -> Result<(), String> {
    let url = api_url(&format!(
        "/api/integrations/github/connections/{}",
        request.connection_id.as_string()
    ));
    let body = serde_json::to_string(request).map_err(|e| format!("{e}"))?;
    request_text("DELETE", &url, Some(&body)).await?;
    Ok(())
}

async fn request_text(method: &str, url: &str, body: Option<&str>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
