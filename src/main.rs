use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calcio_front::api::{FootballService, GeminiClient};
use calcio_front::app::console::{self, Command, HELP};
use calcio_front::app::Action;
use calcio_front::config::Config;
use calcio_front::workers::Orchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr, so it does not interleave with the rendered screen)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calcio_front=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting calcio-front");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded (model: {})", config.gemini_model);

    let oracle = GeminiClient::new(
        &config.gemini_api_url,
        &config.gemini_api_key,
        &config.gemini_model,
    );
    let service = Arc::new(FootballService::new(
        Arc::new(oracle),
        config.oracle_timeout(),
    ));

    let mut orchestrator = Orchestrator::new(service, config.slide_interval());
    orchestrator.start();
    println!("{}", console::render(orchestrator.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
            Some(action) = orchestrator.next_action() => {
                let quiet = matches!(action, Action::SlideTick(_));
                orchestrator.apply(action);
                if !quiet {
                    println!("{}", console::render(orchestrator.state()));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match console::parse_command(&line, orchestrator.state()) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Dispatch(action)) => {
                        orchestrator.apply(action);
                        println!("{}", console::render(orchestrator.state()));
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    info!("Shutting down calcio-front");
    Ok(())
}
