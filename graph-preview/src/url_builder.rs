use crate::config::vars;
use crate::error::{PreviewError, Result};
use url::Url;

/// Graph path used when none is configured
pub const DEFAULT_GRAPH_PATH: &str = "/content/v2";

/// Resolve the full graph endpoint from a gateway base URL and graph path.
///
/// Hosted deployments often set the gateway to the bare host while local
/// setups include the path. If the gateway already ends with the path it is
/// used as-is; otherwise trailing slashes are stripped and the path appended.
pub fn resolve_gateway_url(gateway: Option<&str>, graph_path: Option<&str>) -> Result<String> {
    let gateway = gateway
        .filter(|g| !g.is_empty())
        .ok_or_else(|| PreviewError::missing_env(vars::GRAPH_GATEWAY))?;
    let graph_path = graph_path
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_GRAPH_PATH);

    if gateway.ends_with(graph_path) {
        return Ok(gateway.to_string());
    }

    let base_url = gateway.trim_end_matches('/');
    Ok(format!("{}{}", base_url, graph_path))
}

/// Builder for the URL a graph request is posted to
pub struct GraphUrlBuilder<'a> {
    graph_url: &'a str,
    single_key: Option<&'a str>,
}

impl<'a> GraphUrlBuilder<'a> {
    pub fn new(graph_url: &'a str) -> Self {
        Self {
            graph_url,
            single_key: None,
        }
    }

    /// Authenticate with the single key as the `auth` query parameter
    pub fn single_key(mut self, single_key: Option<&'a str>) -> Self {
        self.single_key = single_key.filter(|k| !k.is_empty());
        self
    }

    pub fn build(&self) -> Result<Url> {
        let mut url = Url::parse(self.graph_url)?;
        if let Some(key) = self.single_key {
            url.query_pairs_mut().append_pair("auth", key);
        }
        Ok(url)
    }
}

/// URL of the CMS script that connects a preview page to the editor
pub fn communication_injector_url(cms_url: &str) -> String {
    format!(
        "{}/util/javascript/communicationinjector.js",
        cms_url.trim_end_matches('/')
    )
}
