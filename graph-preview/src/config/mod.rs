pub mod environment;
pub mod loader;
pub mod types;

pub use environment::{mask_value, EnvironmentReport};
pub use loader::{vars, ConfigLoader, DefaultConfigLoader};
pub use types::{CmsConfig, DeploymentConfig, GraphConfig, PreviewConfig, RetryConfig, ServerConfig};
