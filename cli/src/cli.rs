use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "opti-preview")]
#[command(
    author,
    version,
    about = "Preview gateway for CMS content served from the content graph"
)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the preview server the CMS editor points at
    Serve {
        /// Configuration file path (environment variables override it)
        #[clap(short, long)]
        config: Option<String>,

        /// Address to bind (overrides the configuration file)
        #[clap(long)]
        host: Option<String>,

        /// Port to bind (overrides the configuration file)
        #[clap(short, long)]
        port: Option<u16>,
    },

    /// Fetch preview content once and print it, or the error report
    Preview {
        /// Content key to preview
        #[clap(short, long)]
        key: String,

        /// Content version
        #[clap(long)]
        ver: Option<String>,

        /// Content locale
        #[clap(short, long)]
        loc: Option<String>,

        /// Preview context, for example `edit`
        #[clap(long)]
        ctx: Option<String>,

        /// Preview token issued by the CMS for draft content
        #[clap(long)]
        preview_token: Option<String>,

        /// Additional preview parameter as key=value, may be repeated
        #[clap(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Output format for error reports
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Cli)]
        format: OutputFormat,

        /// Write the output to a file instead of stdout
        #[clap(short, long)]
        output: Option<String>,

        /// Configuration file path (environment variables override it)
        #[clap(short, long)]
        config: Option<String>,

        /// Disable colored terminal output
        #[clap(long, default_value_t = false)]
        no_color: bool,
    },

    /// Print the effective environment with secrets masked
    Debug {
        /// Configuration file path (environment variables override it)
        #[clap(short, long)]
        config: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain terminal report
    Cli,
    /// Structured JSON report
    Json,
    /// Standalone HTML report
    Html,
}
