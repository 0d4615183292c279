//! Weather and locate client tests against a mock HTTP server

use skycast_core::{Condition, FetchError, LocateClient, LocateError, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Provider payload matching the current-weather endpoint shape.
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "name": "Paris",
        "sys": { "country": "FR", "sunrise": 1_700_000_000, "sunset": 1_700_040_000 },
        "main": { "temp": 21.6, "feels_like": 20.1, "humidity": 64, "pressure": 1012 },
        "wind": { "speed": 4.6 },
        "visibility": 10000,
        "weather": [{ "main": "Rain", "description": "light rain" }],
        "dt": 1_700_020_000
    })
}

fn test_client(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url("test-key", server.uri())
}

#[tokio::test]
async fn test_fetch_by_city_parses_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .mount(&server)
        .await;

    let record = test_client(&server).fetch_by_city("Paris").await.unwrap();

    assert_eq!(record.city, "Paris");
    assert_eq!(record.country, "FR");
    assert_eq!(record.temperature, 21.6);
    assert_eq!(record.feels_like, 20.1);
    assert_eq!(record.humidity, 64);
    assert_eq!(record.pressure, 1012);
    assert_eq!(record.visibility, 10000);
    assert_eq!(record.condition, Condition::Rain);
    assert_eq!(record.description, "light rain");
    assert!(record.is_daytime());
}

#[tokio::test]
async fn test_fetch_by_coordinates_sends_lat_lon() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .mount(&server)
        .await;

    let record = test_client(&server)
        .fetch_by_coordinates(48.85, 2.35)
        .await
        .unwrap();

    assert_eq!(record.city, "Paris");
}

#[tokio::test]
async fn test_non_success_status_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404", "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_by_city("Nonexistentville")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::NotFound(404)));
}

#[tokio::test]
async fn test_server_error_is_not_found_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_by_city("Paris").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(500)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_by_city("Paris").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_night_observation() {
    let server = MockServer::start().await;

    let mut body = sample_weather_response();
    body["dt"] = serde_json::json!(1_700_050_000);

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let record = test_client(&server).fetch_by_city("Paris").await.unwrap();
    assert!(!record.is_daytime());
}

// ===== Locate service =====

#[tokio::test]
async fn test_locate_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success", "lat": 50.45, "lon": 30.52, "city": "Kyiv"
        })))
        .mount(&server)
        .await;

    let coords = LocateClient::with_base_url(true, server.uri())
        .locate()
        .await
        .unwrap();

    assert_eq!(coords.latitude, 50.45);
    assert_eq!(coords.longitude, 30.52);
}

#[tokio::test]
async fn test_locate_fail_status_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail", "message": "private range"
        })))
        .mount(&server)
        .await;

    let err = LocateClient::with_base_url(true, server.uri())
        .locate()
        .await
        .unwrap_err();

    assert!(matches!(err, LocateError::Failed(_)));
}

#[tokio::test]
async fn test_locate_disabled_makes_no_request() {
    let server = MockServer::start().await;
    // No mock mounted: a request would 404 and surface as Failed.

    let err = LocateClient::with_base_url(false, server.uri())
        .locate()
        .await
        .unwrap_err();

    assert!(matches!(err, LocateError::Unsupported));
}
