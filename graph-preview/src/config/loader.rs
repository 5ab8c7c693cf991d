use crate::config::types::PreviewConfig;
use crate::error::{PreviewError, Result};
use std::path::Path;
use tracing::debug;

/// Environment variable names read by the gateway
pub mod vars {
    pub const GRAPH_GATEWAY: &str = "OPTIMIZELY_GRAPH_GATEWAY";
    pub const GRAPH_PATH: &str = "OPTIMIZELY_GRAPH_PATH";
    pub const GRAPH_SINGLE_KEY: &str = "OPTIMIZELY_GRAPH_SINGLE_KEY";
    pub const CMS_URL: &str = "OPTIMIZELY_CMS_URL";
    pub const CMS_CLIENT_ID: &str = "OPTIMIZELY_CMS_CLIENT_ID";
    pub const CMS_CLIENT_SECRET: &str = "OPTIMIZELY_CMS_CLIENT_SECRET";
    pub const PROJECT_ID: &str = "OPTI_PROJECT_ID";
    pub const TARGET_ENV: &str = "OPTI_TARGET_ENV";
}

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PreviewConfig>;
    fn load<P: AsRef<Path>>(path: Option<P>) -> Result<PreviewConfig>;
}

/// Loads an optional TOML file, then overlays the process environment
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PreviewConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(PreviewError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        toml::from_str(&content).map_err(|e| {
            PreviewError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })
    }

    fn load<P: AsRef<Path>>(path: Option<P>) -> Result<PreviewConfig> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", env_file.display());
        }

        let base = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.as_ref().display());
                Self::load_from_file(path)?
            }
            None => PreviewConfig::default(),
        };

        Ok(base.with_env(|name| std::env::var(name).ok()))
    }
}

// Convenience functions maintaining the API
impl PreviewConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load an optional TOML file and overlay the process environment
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        DefaultConfigLoader::load(path)
    }

    /// Overlay values found through `lookup`. Empty values count as unset.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let overlay = |slot: &mut Option<String>, name: &str| {
            if let Some(value) = read(name) {
                *slot = Some(value);
            }
        };

        overlay(&mut self.graph.gateway, vars::GRAPH_GATEWAY);
        overlay(&mut self.graph.path, vars::GRAPH_PATH);
        overlay(&mut self.graph.single_key, vars::GRAPH_SINGLE_KEY);
        overlay(&mut self.cms.url, vars::CMS_URL);
        overlay(&mut self.cms.client_id, vars::CMS_CLIENT_ID);
        overlay(&mut self.cms.client_secret, vars::CMS_CLIENT_SECRET);
        overlay(&mut self.deployment.project_id, vars::PROJECT_ID);
        overlay(&mut self.deployment.target_env, vars::TARGET_ENV);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = PreviewConfig::default();
        config.graph.gateway = Some("https://from-file.example.com".to_string());

        let config = config.with_env(lookup(&[
            (vars::GRAPH_GATEWAY, "https://cg.optimizely.com"),
            (vars::GRAPH_SINGLE_KEY, "single-key-value"),
            (vars::CMS_URL, "https://cms.example.com"),
        ]));

        assert_eq!(
            config.graph.gateway.as_deref(),
            Some("https://cg.optimizely.com")
        );
        assert_eq!(config.graph.single_key.as_deref(), Some("single-key-value"));
        assert_eq!(config.cms.url.as_deref(), Some("https://cms.example.com"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = PreviewConfig::default();
        config.graph.path = Some("/content/v3".to_string());

        let config = config.with_env(lookup(&[(vars::GRAPH_PATH, "")]));
        assert_eq!(config.graph.path.as_deref(), Some("/content/v3"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "content_types = [\"ArticlePage\"]\n\n[graph]\ngateway = \"https://cg.optimizely.com\"\n\n[server]\nport = 4000"
        )
        .unwrap();

        let config = PreviewConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.content_types, vec!["ArticlePage".to_string()]);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_load_from_missing_file() {
        let error = PreviewConfig::load_from_file("/definitely/not/here/preview.toml").unwrap_err();
        assert!(matches!(error, PreviewError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[graph\ngateway = ").unwrap();

        let error = PreviewConfig::load_from_file(file.path()).unwrap_err();
        assert!(error.to_string().contains("Failed to parse TOML"));
    }
}
