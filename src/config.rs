use std::env;

use crate::types::{FilterConfig, MaxStops, PriceCap, SearchParams};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("airport code must be three letters, got {0:?}")]
    InvalidAirport(String),
    #[error("departure date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
    #[error("max stops must be 0, 1 or 2, got {0}")]
    InvalidMaxStops(u32),
    #[error("max price must be 300, 600 or 1000, got {0}")]
    InvalidMaxPrice(u32),
    #[error("{key} is not a number: {value:?}")]
    NotANumber { key: &'static str, value: String },
    #[error("missing search parameter {0}")]
    MissingSearch(&'static str),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}

// Environment keys. Credentials are read by amadeus-rs itself.
pub const ENV_BASE_URL: &str = "AMADEUS_BASE_URL";
pub const ENV_ORIGIN: &str = "FLIGHT_ORIGIN";
pub const ENV_DESTINATION: &str = "FLIGHT_DESTINATION";
pub const ENV_DATE: &str = "FLIGHT_DATE";
pub const ENV_MAX_STOPS: &str = "FLIGHT_MAX_STOPS";
pub const ENV_MAX_PRICE: &str = "FLIGHT_MAX_PRICE";
pub const ENV_AIRLINES: &str = "FLIGHT_AIRLINES";

/// Search trigger plus the initial filter state.
///
/// Defaults match a fresh page: no airline restriction, every stop count,
/// the highest price cap.
#[derive(Debug, Clone, Default)]
pub struct Config {
    // None => amadeus-rs test environment.
    pub base_url: Option<String>,

    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<String>,

    pub max_stops: MaxStops,
    pub max_price: PriceCap,
    pub airlines: Vec<String>,
}

pub(crate) fn parse_u32(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        key,
        value: value.to_string(),
    })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from `lookup`, falling back to defaults for absent or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config {
            base_url: get(ENV_BASE_URL),
            origin: get(ENV_ORIGIN),
            destination: get(ENV_DESTINATION),
            departure_date: get(ENV_DATE),
            ..Default::default()
        };

        if let Some(v) = get(ENV_MAX_STOPS) {
            cfg.max_stops = MaxStops::try_from(parse_u32(ENV_MAX_STOPS, &v)?)?;
        }
        if let Some(v) = get(ENV_MAX_PRICE) {
            cfg.max_price = PriceCap::try_from(parse_u32(ENV_MAX_PRICE, &v)?)?;
        }
        if let Some(v) = get(ENV_AIRLINES) {
            cfg.airlines = v
                .split(',')
                .map(|a| a.trim().to_ascii_uppercase())
                .filter(|a| !a.is_empty())
                .collect();
        }
        Ok(cfg)
    }

    /// Positional `ORIGIN DESTINATION DATE` arguments override the environment.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let [origin, destination, date, ..] = args {
            self.origin = Some(origin.clone());
            self.destination = Some(destination.clone());
            self.departure_date = Some(date.clone());
        }
        self
    }

    pub fn search_params(&self) -> Result<SearchParams, ConfigError> {
        let origin = self.origin.as_deref().ok_or(ConfigError::MissingSearch(ENV_ORIGIN))?;
        let destination = self
            .destination
            .as_deref()
            .ok_or(ConfigError::MissingSearch(ENV_DESTINATION))?;
        let date = self.departure_date.as_deref().ok_or(ConfigError::MissingSearch(ENV_DATE))?;
        SearchParams::new(origin, destination, date)
    }

    pub fn filter(&self) -> FilterConfig {
        let mut filter = FilterConfig::new(self.max_stops, self.max_price);
        for airline in &self.airlines {
            if !filter.selected_airlines.contains(airline) {
                filter.selected_airlines.push(airline.clone());
            }
        }
        filter
    }
}
