//! Masked view of the effective configuration, for the debug endpoint

use crate::config::loader::vars;
use crate::config::types::PreviewConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const NOT_SET: &str = "(not set)";

/// Mask a secret, keeping just enough of it to tell values apart
pub fn mask_value(value: Option<&str>) -> String {
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return NOT_SET.to_string(),
    };

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
        format!("***{}", tail)
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

fn plain(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => NOT_SET.to_string(),
    }
}

/// Snapshot of the configuration with secrets masked
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub timestamp: DateTime<Utc>,
    pub environment: BTreeMap<String, String>,
}

impl EnvironmentReport {
    pub fn from_config(config: &PreviewConfig) -> Self {
        let mut environment = BTreeMap::new();

        environment.insert(vars::CMS_URL.to_string(), plain(config.cms.url.as_deref()));
        environment.insert(
            format!("{}_RAW", vars::GRAPH_GATEWAY),
            plain(config.graph.gateway.as_deref()),
        );
        environment.insert(
            format!("{}_RESOLVED", vars::GRAPH_GATEWAY),
            config.graph_url().unwrap_or_else(|e| e.to_string()),
        );
        environment.insert(
            vars::GRAPH_SINGLE_KEY.to_string(),
            mask_value(config.graph.single_key.as_deref()),
        );
        environment.insert(
            vars::CMS_CLIENT_ID.to_string(),
            mask_value(config.cms.client_id.as_deref()),
        );
        environment.insert(
            vars::CMS_CLIENT_SECRET.to_string(),
            mask_value(config.cms.client_secret.as_deref()),
        );
        environment.insert(
            vars::PROJECT_ID.to_string(),
            plain(config.deployment.project_id.as_deref()),
        );
        environment.insert(
            vars::TARGET_ENV.to_string(),
            plain(config.deployment.target_env.as_deref()),
        );

        Self {
            timestamp: Utc::now(),
            environment,
        }
    }
}
