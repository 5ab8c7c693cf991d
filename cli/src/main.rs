mod cli;
mod debug;
mod error;
mod logging;
mod preview;
mod serve;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Serve { config, host, port } => serve::execute(serve::ServeArgs {
            config_path: config,
            host,
            port,
        }),
        Commands::Preview {
            key,
            ver,
            loc,
            ctx,
            preview_token,
            params,
            format,
            output,
            config,
            no_color,
        } => preview::execute(preview::PreviewArgs {
            key,
            ver,
            loc,
            ctx,
            preview_token,
            params,
            format,
            output,
            config_path: config,
            no_color,
        }),
        Commands::Debug { config } => debug::execute(config),
    };

    if let Err(err) = result {
        match err {
            error::CliError::PreviewFailed(_) => ui::error_message(&err.user_message()),
            _ => eprintln!("{} {}", "Error:".bold().red(), err.user_message()),
        }
        process::exit(1);
    }
}
