use amadeus_rs::flight_offers::models::*;
#[test]


fn test_empty_response_deserialization() {
    let resp: FlightOffersResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.data.is_none());
    assert!(resp.offers().is_empty());
}
#[test]


fn test_null_data_deserialization() {
    let resp: FlightOffersResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(resp.offers().is_empty());
}
#[test]


fn test_sparse_offer_deserialization() {
    let json = r#"{"data":[{},{"itineraries":[{"segments":[{}]}]},{"price":{}}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    let offers = resp.offers();
    assert_eq!(offers.len(), 3);
    assert!(offers[0].id.is_none());
    assert!(offers[0].itineraries.is_none());
    let segments = offers[1].itineraries.as_ref().unwrap()[0].segments.as_ref().unwrap();
    assert!(segments[0].carrier_code.is_none());
    assert!(offers[2].price.as_ref().unwrap().total.is_none());
}
#[test]


fn test_numeric_price_and_id_are_kept_as_strings() {
    let json = r#"{"data":[{"id":7,"price":{"total":250.5,"currency":"USD"}}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    let offer = &resp.offers()[0];
    assert_eq!(offer.id.as_deref(), Some("7"));
    assert_eq!(offer.price.as_ref().unwrap().total.as_deref(), Some("250.5"));
}
#[test]


fn test_unexpected_price_type_is_absent() {
    let json = r#"{"data":[{"price":{"total":{"amount":"1"}}}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    assert!(resp.offers()[0].price.as_ref().unwrap().total.is_none());
}
#[test]


fn test_full_segment_deserialization() {
    let json = r#"{"departure":{"iataCode":"JFK","terminal":"4","at":"2025-03-01T08:00:00"},"arrival":{"iataCode":"LAX","at":"2025-03-01T11:40:00"},"carrierCode":"DL","number":"400","aircraft":{"code":"321"},"operating":{"carrierCode":"DL"},"duration":"PT5H40M","id":"1","numberOfStops":0,"blacklistedInEU":false}"#;
    let seg: Segment = serde_json::from_str(json).unwrap();
    assert_eq!(seg.carrier_code.as_deref(), Some("DL"));
    assert_eq!(seg.departure.unwrap().at.as_deref(), Some("2025-03-01T08:00:00"));
    assert_eq!(seg.number_of_stops, Some(0));
}
#[test]


fn test_query_serialization() {
    let query = FlightOffersQuery::one_way("JFK", "LAX", "2025-03-01");
    let encoded = serde_urlencoded::to_string(&query).unwrap();
    assert_eq!(
        encoded,
        "originLocationCode=JFK&destinationLocationCode=LAX&departureDate=2025-03-01&adults=1&max=50"
    );
}
#[test]


fn test_display_counts_offers() {
    let json = r#"{"data":[{},{}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.to_string(), "Flight offers: 2");
}
#[test]


fn test_null_unused_collections_do_not_fail_response() {
    let json = r#"{"data":[{"id":"1","price":{"total":"10","fees":null},"validatingAirlineCodes":null,"travelerPricings":null}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    let offer = &resp.offers()[0];
    assert_eq!(offer.id.as_deref(), Some("1"));
    assert!(offer.validating_airline_codes.is_none());
    assert!(offer.traveler_pricings.is_none());
    let price = offer.price.as_ref().unwrap();
    assert_eq!(price.total.as_deref(), Some("10"));
    assert!(price.fees.is_none());
}
#[test]


fn test_mistyped_numbers_read_as_absent() {
    let json = r#"{"meta":{"count":"2"},"data":[{"id":"1","oneWay":"yes","numberOfBookableSeats":"9","price":{"total":"10"},"itineraries":[{"segments":[{"carrierCode":"AA","numberOfStops":"0"}]}]}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    assert!(resp.meta.as_ref().unwrap().count.is_none());
    let offer = &resp.offers()[0];
    assert!(offer.number_of_bookable_seats.is_none());
    assert!(offer.one_way.is_none());
    let segment = &offer.itineraries.as_ref().unwrap()[0].segments.as_ref().unwrap()[0];
    assert_eq!(segment.carrier_code.as_deref(), Some("AA"));
    assert!(segment.number_of_stops.is_none());
}
#[test]


fn test_null_dictionary_maps_do_not_fail_response() {
    let json = r#"{"data":[{"id":"1"}],"dictionaries":{"carriers":null,"aircraft":[],"currencies":{"USD":"US DOLLAR"}}}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.offers().len(), 1);
    let dictionaries = resp.dictionaries.unwrap();
    assert!(dictionaries.carriers.is_none());
    assert!(dictionaries.aircraft.is_none());
    assert_eq!(
        dictionaries.currencies.unwrap().get("USD").map(String::as_str),
        Some("US DOLLAR")
    );
}
#[test]


fn test_malformed_offer_keeps_its_siblings() {
    let json = r#"{"data":[1,{"id":"2","itineraries":"none","price":"free"},{"id":3}]}"#;
    let resp: FlightOffersResponse = serde_json::from_str(json).unwrap();
    let offers = resp.offers();
    assert_eq!(offers.len(), 3);
    assert!(offers[0].id.is_none());
    assert_eq!(offers[1].id.as_deref(), Some("2"));
    assert!(offers[1].itineraries.is_none());
    assert!(offers[1].price.is_none());
    assert_eq!(offers[2].id.as_deref(), Some("3"));
}
