use crate::error::{PreviewError, Result};
use crate::fetch::RetryPolicy;
use crate::url_builder::resolve_gateway_url;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Main configuration structure for the preview gateway
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Content graph connection settings
    pub graph: GraphConfig,
    /// CMS instance settings
    pub cms: CmsConfig,
    /// Hosting metadata reported by the debug endpoint
    pub deployment: DeploymentConfig,
    /// Index-lag retry settings for preview fetches
    pub retry: RetryConfig,
    /// Preview server bind address
    pub server: ServerConfig,
    /// Registered content type keys. Empty disables the registry check.
    pub content_types: Vec<String>,
}

/// Content graph connection settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Gateway base URL, with or without the graph path
    pub gateway: Option<String>,
    /// Graph path appended to the gateway when missing
    pub path: Option<String>,
    /// Single key used for published content
    pub single_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// CMS instance settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Base URL of the CMS, used for the editor communication script
    pub url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub project_id: Option<String>,
    pub target_env: Option<String>,
}

/// Index-lag retry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total number of fetch attempts, first try included
    pub max_attempts: u32,
    /// Fixed pause between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            delay_ms: 200,
        }
    }
}

/// Preview server bind address
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl PreviewConfig {
    /// Resolved graph endpoint URL
    pub fn graph_url(&self) -> Result<String> {
        resolve_gateway_url(self.graph.gateway.as_deref(), self.graph.path.as_deref())
    }

    /// Request timeout for graph calls
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.graph.timeout_seconds.unwrap_or(30))
    }

    /// Retry policy for preview fetches
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_attempts,
            Duration::from_millis(self.retry.delay_ms),
        )
    }

    /// Socket address the preview server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            PreviewError::invalid_config(format!("Invalid server host: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Validate settings that would otherwise fail later at request time
    pub fn validate(&self) -> Result<()> {
        self.graph_url()?;

        if self.retry.max_attempts == 0 {
            return Err(PreviewError::invalid_config(
                "retry.max_attempts must be at least 1",
            ));
        }

        if self.graph.timeout_seconds == Some(0) {
            return Err(PreviewError::invalid_config(
                "graph.timeout_seconds must be greater than 0",
            ));
        }

        self.bind_addr()?;
        Ok(())
    }
}
