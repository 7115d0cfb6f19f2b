//! Client for the aprs.fi position API.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::repeater::Loose;

/// Errors that can occur while looking up a station's position.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request failed or returned an error status.
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body could not be deserialized.
    #[error("could not deserialize response: {0}")]
    Deserialize(#[source] reqwest::Error),
    /// aprs.fi answered with a result other than `ok`.
    #[error("api error: {0}")]
    Api(String),
    /// aprs.fi has no position for the station.
    #[error("no position reported for {0}")]
    NoEntries(String),
    /// The reported position is not a pair of numbers.
    #[error("invalid coordinates in response")]
    InvalidCoordinates,
}

/// The last reported position of a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Response to a `what=loc` query.
#[derive(Debug, Deserialize)]
struct LocResponse {
    /// `ok` or `fail`.
    result: String,
    /// Explanation when `result` is `fail`.
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    entries: Vec<LocEntry>,
}

/// aprs.fi encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct LocEntry {
    lat: Loose,
    lng: Loose,
}

/// aprs.fi API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client for the API at `base_url`, authenticating with `api_key`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Client {
        Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Returns the most recent position reported by `callsign`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, aprs.fi reports a failure, or it doesn't know the
    /// station's position.
    pub async fn location(&self, callsign: &str) -> Result<Location, Error> {
        let url = format!("{}/get", self.base_url);
        let params = [
            ("name", callsign),
            ("what", "loc"),
            ("apikey", &self.api_key),
            ("format", "json"),
        ];

        debug!(%callsign, "fetching position from aprs.fi");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .inspect_err(|err| error!(?err, %callsign, "aprs.fi request failed"))?;

        let body: LocResponse = response.json().await.map_err(Error::Deserialize)?;

        if body.result != "ok" {
            return Err(Error::Api(body.description.unwrap_or(body.result)));
        }

        let entry = body
            .entries
            .first()
            .ok_or_else(|| Error::NoEntries(callsign.to_string()))?;

        match (entry.lat.as_f64(), entry.lng.as_f64()) {
            (Some(lat), Some(lng)) => Ok(Location { lat, lng }),
            _ => Err(Error::InvalidCoordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn setup() -> (MockServer, Client) {
        let server = MockServer::start().await;
        let base_url = format!("{}/api/", server.uri());
        let client = Client::new(reqwest::Client::new(), &base_url, "test-key");

        (server, client)
    }

    #[tokio::test]
    async fn location_parses_string_coordinates() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/get"))
            .and(query_param("name", "N0CALL-9"))
            .and(query_param("what", "loc"))
            .and(query_param("apikey", "test-key"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "command": "get",
                "result": "ok",
                "what": "loc",
                "found": 1,
                "entries": [{ "name": "N0CALL-9", "lat": "37.80000", "lng": "-122.40000" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let location = client.location("N0CALL-9").await.unwrap();

        assert_eq!(
            location,
            Location {
                lat: 37.8,
                lng: -122.4
            }
        );
    }

    #[tokio::test]
    async fn location_without_entries_is_an_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/get"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "result": "ok", "found": 0, "entries": [] })),
            )
            .mount(&server)
            .await;

        let err = client.location("N0CALL").await.unwrap_err();

        assert!(matches!(err, Error::NoEntries(call) if call == "N0CALL"));
    }

    #[tokio::test]
    async fn location_reports_api_failure() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({ "result": "fail", "description": "authentication failed" }),
            ))
            .mount(&server)
            .await;

        let err = client.location("N0CALL").await.unwrap_err();

        assert!(matches!(err, Error::Api(msg) if msg == "authentication failed"));
    }

    #[tokio::test]
    async fn location_reports_http_errors() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client.location("N0CALL").await.unwrap_err();

        assert!(matches!(err, Error::Request(_)));
    }

    #[tokio::test]
    async fn location_reports_connection_errors() {
        let client = Client::new(reqwest::Client::new(), "http://127.0.0.1:1/api", "test-key");

        let err = client.location("N0CALL").await.unwrap_err();

        assert!(matches!(err, Error::Request(err) if err.is_connect()));
    }
}
