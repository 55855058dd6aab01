mod command;
mod config;
mod format;
mod normalize;
mod projection;
mod report;
mod search;
mod state;
mod types;

use anyhow::{Context, Result};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use std::env;
use std::sync::Arc;
use dotenv::dotenv;

use config::Config;
use state::SearchSession;

use amadeus_rs::{AmadeusClient, Credentials};

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = Config::from_env()?.with_args(&args);
    let params = cfg
        .search_params()
        .context("usage: flight_finder ORIGIN DESTINATION YYYY-MM-DD (or FLIGHT_ORIGIN/FLIGHT_DESTINATION/FLIGHT_DATE)")?;

    let credentials = Credentials::from_env()?;
    let http = Arc::new(AmadeusClient::new_with_config(credentials, cfg.base_url.clone()));
    let session = SearchSession::new(cfg.filter());

    if let Err(e) = search::run_search(&http, &session, params).await {
        error!(error = %e, "search failed");
        return Err(e);
    }

    println!("{}", command::HELP);
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut tasks = JoinSet::new();

    // Renders are drained before the next line is read.
    loop {
        tokio::select! {
            biased;
            _ = session.changed() => report::show(&session).await,
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse_command(&line) {
                    Ok(Some(cmd)) => {
                        if !command::apply(cmd, &http, &session, &mut tasks).await {
                            info!(pending = session.inflight.len(), "quit");
                            return Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, "rejected command");
                        eprintln!("{e}\n{}", command::HELP);
                    }
                }
            }
        }
    }

    // Input closed: let searches already started finish and show their results.
    info!(pending = session.inflight.len(), "waiting for outstanding searches");
    while tasks.join_next().await.is_some() {}
    tokio::select! {
        biased;
        _ = session.changed() => report::show(&session).await,
        _ = std::future::ready(()) => {}
    }

    Ok(())
}
