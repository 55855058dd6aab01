//! Line commands read from stdin while results are on screen.

use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::error;

use amadeus_rs::AmadeusClient;

use crate::config::{ConfigError, ENV_MAX_PRICE, ENV_MAX_STOPS, parse_u32};
use crate::search;
use crate::state::SearchSession;
use crate::types::{MaxStops, PriceCap, SearchParams};

pub const HELP: &str = "commands: search ORIGIN DESTINATION YYYY-MM-DD | stops 0|1|2 | price 300|600|1000 | airline CODE | show | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(SearchParams),
    MaxStops(MaxStops),
    MaxPrice(PriceCap),
    ToggleAirline(String),
    Show,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, ConfigError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let cmd = match verb.to_ascii_lowercase().as_str() {
        "search" => {
            let origin = words.next().ok_or(ConfigError::MissingSearch("ORIGIN"))?;
            let destination = words.next().ok_or(ConfigError::MissingSearch("DESTINATION"))?;
            let date = words.next().ok_or(ConfigError::MissingSearch("DATE"))?;
            Command::Search(SearchParams::new(origin, destination, date)?)
        }
        "stops" => {
            let v = words.next().ok_or(ConfigError::MissingSearch(ENV_MAX_STOPS))?;
            Command::MaxStops(MaxStops::try_from(parse_u32(ENV_MAX_STOPS, v)?)?)
        }
        "price" => {
            let v = words.next().ok_or(ConfigError::MissingSearch(ENV_MAX_PRICE))?;
            Command::MaxPrice(PriceCap::try_from(parse_u32(ENV_MAX_PRICE, v)?)?)
        }
        "airline" => {
            let code = words.next().ok_or(ConfigError::MissingSearch("AIRLINE"))?;
            Command::ToggleAirline(code.to_ascii_uppercase())
        }
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(ConfigError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Apply `cmd` to the session. Searches run on `tasks` so a newer one can
/// supersede them. Returns `false` on quit.
pub async fn apply(
    cmd: Command,
    http: &Arc<AmadeusClient>,
    session: &SearchSession,
    tasks: &mut JoinSet<()>,
) -> bool {
    match cmd {
        Command::Search(params) => {
            let http = Arc::clone(http);
            let session = session.clone();
            tasks.spawn(async move {
                if let Err(e) = search::run_search(&http, &session, params).await {
                    error!(error = %e, "search failed");
                }
            });
        }
        Command::MaxStops(v) => session.set_max_stops(v).await,
        Command::MaxPrice(v) => session.set_max_price(v).await,
        Command::ToggleAirline(code) => session.toggle_airline(&code).await,
        Command::Show => session.request_render(),
        Command::Quit => return false,
    }
    true
}
