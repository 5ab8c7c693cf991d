use crate::error::{Result, ResultExt};
use graph_preview::{EnvironmentReport, PreviewConfig};

pub fn execute(config_path: Option<String>) -> Result<()> {
    let config = PreviewConfig::load(config_path.as_deref())
        .with_context(|| "Failed to load configuration")?;

    let report = EnvironmentReport::from_config(&config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
