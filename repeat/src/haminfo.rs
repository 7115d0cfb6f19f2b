//! Client for the haminfo repeater database.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::aprs_fi::Location;
use crate::consts::API_KEY_HEADER;
use crate::repeater::RepeaterRecord;
use crate::request::ParsedRequest;

/// Errors that can occur while querying the repeater database.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request failed or returned an error status.
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body was not a list of repeaters.
    #[error("could not deserialize response: {0}")]
    Deserialize(#[source] reqwest::Error),
}

/// Body of a `/nearest` request.
#[derive(Debug, Serialize)]
struct NearestQuery<'a> {
    lat: f64,
    lon: f64,
    count: u64,
    band: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<String>,
}

/// haminfo API client.
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

    /// Returns the repeaters closest to `location` that satisfy `request`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response isn't a list of repeaters.
    pub async fn nearest(
        &self,
        location: &Location,
        request: &ParsedRequest,
    ) -> Result<Vec<RepeaterRecord>, Error> {
        let url = format!("{}/nearest", self.base_url);
        let query = NearestQuery {
            lat: location.lat,
            lon: location.lng,
            count: request.count,
            band: request.band,
            filters: request.filters_param(),
        };

        info!(
            count = query.count,
            band = query.band,
            filters = ?query.filters,
            "looking for nearest stations"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .inspect_err(|err| error!(?err, "couldn't fetch nearest stations"))?;

        let records: Vec<RepeaterRecord> = response.json().await.map_err(Error::Deserialize)?;
        debug!(num_records = records.len(), "received nearest stations");

        Ok(records)
    }
}
