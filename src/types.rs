use amadeus_rs::flight_offers::models::FlightOffersQuery;
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ConfigError;

/// One flat, display-ready flight built from an upstream offer.
///
/// `id` is the upstream offer id or, when that is missing, the offer's
/// position in its response. It is only unique within one response and
/// must not be used to correlate flights across searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub price: f64,
    pub stops: u32,
    /// Raw ISO-8601 token such as `PT2H30M`.
    pub duration: String,
    pub departure_time: String,
}

/// Stops filter as offered to the user. `TwoPlus` means "2 or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxStops {
    NonStop,
    OneStop,
    #[default]
    TwoPlus,
}

impl MaxStops {
    /// Highest stop count admitted.
    pub fn limit(self) -> u32 {
        match self {
            MaxStops::NonStop => 0,
            MaxStops::OneStop => 1,
            MaxStops::TwoPlus => u32::MAX,
        }
    }
}

impl TryFrom<u32> for MaxStops {
    type Error = ConfigError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(MaxStops::NonStop),
            1 => Ok(MaxStops::OneStop),
            2 => Ok(MaxStops::TwoPlus),
            other => Err(ConfigError::InvalidMaxStops(other)),
        }
    }
}

/// Price ceiling as offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceCap {
    Under300,
    Under600,
    #[default]
    Under1000,
}

impl PriceCap {
    pub fn amount(self) -> f64 {
        match self {
            PriceCap::Under300 => 300.0,
            PriceCap::Under600 => 600.0,
            PriceCap::Under1000 => 1000.0,
        }
    }
}

impl TryFrom<u32> for PriceCap {
    type Error = ConfigError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            300 => Ok(PriceCap::Under300),
            600 => Ok(PriceCap::Under600),
            1000 => Ok(PriceCap::Under1000),
            other => Err(ConfigError::InvalidMaxPrice(other)),
        }
    }
}

/// Filter applied by the result projection.
///
/// An empty `selected_airlines` means no airline restriction. A selected
/// airline that is absent from the results simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub max_stops: u32,
    pub max_price: f64,
    pub selected_airlines: Vec<String>,
}

impl FilterConfig {
    pub fn new(max_stops: MaxStops, max_price: PriceCap) -> Self {
        Self {
            max_stops: max_stops.limit(),
            max_price: max_price.amount(),
            selected_airlines: Vec::new(),
        }
    }

    /// Add `airline` to the selection, or remove it if already selected.
    pub fn toggle_airline(&mut self, airline: &str) {
        if let Some(pos) = self.selected_airlines.iter().position(|a| a == airline) {
            self.selected_airlines.remove(pos);
        } else {
            self.selected_airlines.push(airline.to_string());
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(MaxStops::default(), PriceCap::default())
    }
}

/// Average price of one airline inside the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineStats {
    pub airline: String,
    pub avg_price: f64,
    pub flight_count: usize,
    /// Chart colour, cycled from a fixed palette by group position.
    pub color: &'static str,
}

/// Headline numbers for the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_flights: usize,
    pub best_price: Option<f64>,
    pub avg_price: Option<f64>,
    pub airline_count: usize,
}

/// A validated search trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

fn airport_code(raw: &str) -> Result<String, ConfigError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(ConfigError::InvalidAirport(raw.to_string()))
    }
}

impl SearchParams {
    /// Upper-cases airport codes and checks the date is `YYYY-MM-DD`.
    pub fn new(origin: &str, destination: &str, departure_date: &str) -> Result<Self, ConfigError> {
        let date = departure_date.trim();
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ConfigError::InvalidDate(departure_date.to_string()))?;
        Ok(Self {
            origin: airport_code(origin)?,
            destination: airport_code(destination)?,
            departure_date: date.to_string(),
        })
    }

    pub fn to_query(&self) -> FlightOffersQuery {
        FlightOffersQuery::one_way(&self.origin, &self.destination, &self.departure_date)
    }
}
