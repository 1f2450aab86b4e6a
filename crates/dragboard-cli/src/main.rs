mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use dragboard_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("DRAGBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "dragboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let mut ctx = CliContext::load(cli.prefs, &config).await?;

    match cli.command {
        None => handlers::view::handle_current(&ctx),
        Some(Commands::View(view_cmd)) => {
            handlers::view::handle(&mut ctx, view_cmd.action).await?;
        }
        Some(Commands::Board(board_cmd)) => {
            handlers::board::handle(&mut ctx, board_cmd.action).await?;
        }
        Some(Commands::Outline(outline_cmd)) => {
            handlers::outline::handle(&mut ctx, outline_cmd.action).await?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
