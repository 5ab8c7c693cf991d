use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use graph_preview::{PreviewConfig, PreviewError};
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub config_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub fn execute(args: ServeArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: ServeArgs) -> Result<()> {
    let mut config = PreviewConfig::load(args.config_path.as_deref())
        .with_context(|| "Failed to load configuration")?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let addr = config.bind_addr()?;
    let graph_url = config.graph_url()?;

    ui::section_header("Preview Server");
    ui::key_value("Content graph", &graph_url);
    ui::key_value("Preview URL", &format!("http://{}/preview?key=<content key>", addr));
    if config.cms.url.is_none() {
        ui::warning_message(
            "OPTIMIZELY_CMS_URL is not set, preview pages will not connect to the CMS editor",
        );
    }
    ui::info_message("Press Ctrl+C to stop");

    graph_preview::serve(config).await.map_err(|e| match e {
        PreviewError::Io(io) => CliError::Io(io).with_context(format!("Failed to bind {}", addr)),
        other => CliError::from(other),
    })
}
