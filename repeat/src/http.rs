//! HTTP features

pub mod client {
    use crate::consts;

    pub use reqwest::Client;

    /// Returns a default HTTP client builder.
    #[must_use]
    pub fn builder() -> reqwest::ClientBuilder {
        reqwest::ClientBuilder::new()
            .timeout(consts::HTTP_TIMEOUT)
            .user_agent(consts::HTTP_USER_AGENT)
    }
}

/// Builds the HTTP client shared by all plugins.
///
/// # Errors
///
/// Returns [`Error::HttpClient`](crate::Error::HttpClient) if the TLS backend cannot be
/// initialized.
pub fn build_client() -> Result<client::Client, crate::Error> {
    client::builder().build().map_err(crate::Error::HttpClient)
}
