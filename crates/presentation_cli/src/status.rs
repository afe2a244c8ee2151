//! Status of a running server

use std::fmt::Write;

use serde_json::Value;

/// Liveness and readiness as reported by the server
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub health: Value,
    pub ready: bool,
    pub readiness: Value,
}

/// Join a base URL and an absolute path without doubling the slash
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Query `/api/health` and `/api/ready`
///
/// A 503 from `/api/ready` is a valid answer (not ready), not an error.
pub async fn fetch_status(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<ServerStatus, reqwest::Error> {
    let health = client
        .get(endpoint_url(base_url, "/api/health"))
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    let response = client.get(endpoint_url(base_url, "/api/ready")).send().await?;
    let ready = response.status().is_success();
    let readiness = response.json::<Value>().await?;

    Ok(ServerStatus {
        health,
        ready,
        readiness,
    })
}

/// Human-readable summary
pub fn render_status(status: &ServerStatus) -> String {
    let mut out = String::new();
    let version = status.health["version"].as_str().unwrap_or("unknown");

    let _ = writeln!(out, "📊 HeatGuard server v{version}");
    let _ = writeln!(
        out,
        "   Ready: {}",
        if status.ready { "✅ yes" } else { "❌ no" }
    );

    if let Some(services) = status.readiness["services"].as_object() {
        let mut names: Vec<&String> = services.keys().collect();
        names.sort();
        for name in names {
            let service = &services[name.as_str()];
            let mark = if service["healthy"].as_bool().unwrap_or(false) {
                "✅"
            } else {
                "❌"
            };
            let detail = service["info"]
                .as_str()
                .or_else(|| service["error"].as_str())
                .map(|d| format!(" ({d})"))
                .unwrap_or_default();
            let _ = writeln!(out, "   {mark} {name}{detail}");
        }
    }

    out
}
