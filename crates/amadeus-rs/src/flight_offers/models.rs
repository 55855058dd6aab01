//! Flight offers module models.
//!
//! Wire shapes of `GET /v2/shopping/flight-offers`. The upstream schema is
//! large and partially populated in practice, so every field is optional
//! and a missing, null or mistyped member reads as absent instead of
//! rejecting the whole response.

use derive_more::Display;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;


/// Accept a JSON string or number, treat anything else as absent.
///
/// Prices and ids arrive as strings per the API docs, but some mirrors
/// send bare numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}


/// Null or a value of the wrong shape reads as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| T::deserialize(v).ok()))
}


/// Like [`lenient`] for arrays, but a malformed element becomes
/// `T::default()` instead of dropping its siblings.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|v| T::deserialize(v).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}


#[derive(Debug, Clone, Default, Serialize, Deserialize, Display)]
#[display("Flight offers: {}", data.as_ref().map_or(0, Vec::len))]


/// Response model for the flight offers search.
///
pub struct FlightOffersResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub data: Option<Vec<FlightOffer>>,
    #[serde(default, deserialize_with = "lenient")]
    pub meta: Option<ResponseMeta>,
    #[serde(default, deserialize_with = "lenient")]
    pub dictionaries: Option<Dictionaries>,
}


impl FlightOffersResponse {
    /// Offers in upstream order, empty when `data` is absent.
    pub fn offers(&self) -> &[FlightOffer] {
        self.data.as_deref().unwrap_or(&[])
    }
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]


pub struct ResponseMeta {
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Option<HashMap<String, String>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]


/// Code-to-name lookup tables shipped alongside the offers.
///
pub struct Dictionaries {
    #[serde(default, deserialize_with = "lenient")]
    pub carriers: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub aircraft: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<HashMap<String, String>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("Offer {} ({} itineraries)", id.as_deref().unwrap_or("?"), itineraries.as_ref().map_or(0, Vec::len))]


/// One priced itinerary option.
///
pub struct FlightOffer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub type_: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub one_way: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_ticketing_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_bookable_seats: Option<u32>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub itineraries: Option<Vec<Itinerary>>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub validating_airline_codes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub traveler_pricings: Option<Vec<TravelerPricing>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]


/// Itinerary data model. One direction of travel.
///
pub struct Itinerary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub segments: Option<Vec<Segment>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]


/// Segment data model. One physical flight leg.
///
pub struct Segment {
    #[serde(default, deserialize_with = "lenient")]
    pub departure: Option<Endpoint>,
    #[serde(default, deserialize_with = "lenient")]
    pub arrival: Option<Endpoint>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub carrier_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aircraft: Option<AircraftRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub operating: Option<OperatingCarrier>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_stops: Option<u32>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]


/// Departure or arrival point of a segment.
///
pub struct Endpoint {
    #[serde(default, deserialize_with = "lenient")]
    pub iata_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub terminal: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub at: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]


pub struct AircraftRef {
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]


pub struct OperatingCarrier {
    #[serde(default, deserialize_with = "lenient_string")]
    pub carrier_code: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} {}", total.as_deref().unwrap_or("?"), currency.as_deref().unwrap_or(""))]


/// Price block of an offer. Amounts are decimal strings.
///
pub struct Price {
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub base: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub grand_total: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub fees: Option<Vec<Fee>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]


pub struct Fee {
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub type_: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]


pub struct TravelerPricing {
    #[serde(default, deserialize_with = "lenient_string")]
    pub traveler_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fare_option: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub traveler_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Price>,
}


/// Default traveler count for a search.
pub const DEFAULT_ADULTS: u8 = 1;


/// Default cap on returned offers.
pub const DEFAULT_MAX_RESULTS: u16 = 50;


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]


/// Query parameters for the flight offers search.
///
pub struct FlightOffersQuery {
    pub origin_location_code: String,
    pub destination_location_code: String,
    pub departure_date: String,
    pub adults: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u16>,
}


impl FlightOffersQuery {
    /// One adult, one way, at most [`DEFAULT_MAX_RESULTS`] offers.
    pub fn one_way(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin_location_code: origin.into(),
            destination_location_code: destination.into(),
            departure_date: departure_date.into(),
            adults: DEFAULT_ADULTS,
            max: Some(DEFAULT_MAX_RESULTS),
        }
    }
}
