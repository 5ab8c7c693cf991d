use crate::cli::OutputFormat;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use graph_preview::{
    preview_once, CliRenderer, FetchOutcome, HtmlRenderer, JsonRenderer, PreviewConfig,
    PreviewParams, PreviewReport, ReportRenderer,
};
use std::fs;
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PreviewArgs {
    pub key: String,
    pub ver: Option<String>,
    pub loc: Option<String>,
    pub ctx: Option<String>,
    pub preview_token: Option<String>,
    pub params: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub config_path: Option<String>,
    pub no_color: bool,
}

pub fn execute(args: PreviewArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: PreviewArgs) -> Result<()> {
    let config = PreviewConfig::load(args.config_path.as_deref())
        .with_context(|| "Failed to load configuration")?;
    let params = build_params(&args)?;
    debug!("Preview parameters: {:?}", params);

    match preview_once(&config, &params).await? {
        FetchOutcome::Success(content) => {
            let json = serde_json::to_string_pretty(&content)?;
            write_output(args.output.as_deref(), &json)?;
            Ok(())
        }
        FetchOutcome::Failure(failure) => {
            let report = PreviewReport::build(&failure, &params);
            let rendered = match args.format {
                OutputFormat::Cli => CliRenderer {
                    use_emojis: !args.no_color,
                }
                .render(&report),
                OutputFormat::Json => JsonRenderer::new().render(&report),
                OutputFormat::Html => HtmlRenderer::new().render(&report),
            };
            write_output(args.output.as_deref(), &rendered)?;
            Err(CliError::PreviewFailed(report.message))
        }
    }
}

/// Combine the named flags with repeated `--param KEY=VALUE` pairs
fn build_params(args: &PreviewArgs) -> Result<PreviewParams> {
    let mut pairs = vec![("key".to_string(), args.key.clone())];

    let named = [
        ("ver", &args.ver),
        ("loc", &args.loc),
        ("ctx", &args.ctx),
        ("preview_token", &args.preview_token),
    ];
    for (name, value) in named {
        if let Some(value) = value {
            pairs.push((name.to_string(), value.clone()));
        }
    }

    for param in &args.params {
        let (name, value) = param
            .split_once('=')
            .filter(|(name, _)| !name.is_empty())
            .ok_or_else(|| CliError::InvalidParam(param.clone()))?;
        pairs.push((name.to_string(), value.to_string()));
    }

    Ok(PreviewParams::from_pairs(pairs))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            ui::success_message(&format!("Output written to {}", path));
        }
        None => println!("{}", content),
    }
    Ok(())
}
