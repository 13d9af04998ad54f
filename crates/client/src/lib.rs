//! Marketplace HTTP Client
//!
//! A typed Rust client for the job-marketplace backend that sits behind
//! the Portico edge. Requests made on behalf of a resolved caller carry
//! the `x-user-id` identity header.
//!
//! # Quick Start
//!
//! ```no_run
//! use portico_client::MarketClient;
//!
//! # async fn example() -> Result<(), portico_client::Error> {
//! let client = MarketClient::new("http://localhost:9090");
//!
//! if client.health().await? {
//!     println!("backend is healthy");
//! }
//!
//! for publication in client.list_publications().await? {
//!     println!("{}: {}", publication.id, publication.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Use the builder for custom configuration:
//!
//! ```no_run
//! use portico_client::MarketClientBuilder;
//! use portico_core::{Principal, SignalSource};
//! use std::time::Duration;
//!
//! let client = MarketClientBuilder::new("http://localhost:9090")
//!     .timeout(Duration::from_secs(10))
//!     .principal(Principal { actor_id: 7, source: SignalSource::Cookie })
//!     .build()
//!     .unwrap();
//! ```

mod error;
pub mod manager;

pub use error::Error;
pub use manager::ClientManager;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use portico_core::Principal;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity header attached to requests made on behalf of a known actor.
const USER_ID_HEADER: &str = "x-user-id";

/// HTTP client for the marketplace backend.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: Client,
    base_url: String,
    principal: Principal,
}

/// Builder for configuring a [`MarketClient`].
#[derive(Debug)]
pub struct MarketClientBuilder {
    base_url: String,
    timeout: Duration,
    principal: Principal,
    client: Option<Client>,
}

impl MarketClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            principal: Principal::anonymous(),
            client: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the caller identity attached to every request.
    #[must_use]
    pub fn principal(mut self, principal: Principal) -> Self {
        self.principal = principal;
        self
    }

    /// Use a custom reqwest Client.
    ///
    /// Useful for configuring TLS, proxies, or other advanced settings.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MarketClient, Error> {
        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        Ok(MarketClient {
            client,
            base_url: self.base_url,
            principal: self.principal,
        })
    }
}

impl MarketClient {
    /// Create a new anonymous client with default configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        MarketClientBuilder::new(base_url)
            .build()
            .expect("default client configuration should not fail")
    }

    /// Create a builder for advanced configuration.
    pub fn builder(base_url: impl Into<String>) -> MarketClientBuilder {
        MarketClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The caller identity this client acts as.
    pub fn principal(&self) -> Principal {
        self.principal
    }

    /// Add the identity header if the caller is known.
    fn add_identity(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.principal.is_anonymous() {
            req
        } else {
            req.header(USER_ID_HEADER, self.principal.actor_id)
        }
    }

    /// Check if the backend is healthy.
    pub async fn health(&self) -> Result<bool, Error> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .add_identity(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(response.status().is_success())
    }

    /// List job/service publications.
    pub async fn list_publications(&self) -> Result<Vec<Publication>, Error> {
        let url = format!("{}/v1/publications", self.base_url);

        let response = self
            .add_identity(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if response.status().is_success() {
            response
                .json::<Vec<Publication>>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))
        } else {
            Err(Error::Http {
                status: response.status().as_u16(),
                message: format!("failed to list publications: {}", response.status()),
            })
        }
    }

    /// Get a single publication by id.
    ///
    /// Returns `None` if it does not exist.
    pub async fn get_publication(&self, id: u64) -> Result<Option<Publication>, Error> {
        let url = format!("{}/v1/publications/{id}", self.base_url);

        let response = self
            .add_identity(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if response.status().is_success() {
            let publication = response
                .json::<Publication>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            Ok(Some(publication))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            Err(Error::Http {
                status: response.status().as_u16(),
                message: format!("failed to get publication: {}", response.status()),
            })
        }
    }

    /// Apply to a publication on behalf of the caller.
    pub async fn create_postulation(
        &self,
        publication_id: u64,
        message: &str,
    ) -> Result<Postulation, Error> {
        let url = format!("{}/v1/postulations", self.base_url);
        let body = NewPostulation {
            publication_id,
            message: message.to_owned(),
        };

        let response = self
            .add_identity(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if response.status().is_success() {
            response
                .json::<Postulation>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))
        } else {
            let error = response
                .json::<ErrorResponse>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            Err(Error::Api {
                code: error.code,
                message: error.message,
            })
        }
    }
}

// =============================================================================
// Request / response types
// =============================================================================

/// Error response from the backend API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// A job/service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    /// Publication id.
    pub id: u64,
    /// Listing title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// Location name.
    pub location: String,
    /// Id of the publishing user.
    pub owner_id: u64,
}

/// A user's application to a publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Postulation {
    /// Postulation id.
    pub id: u64,
    /// The publication applied to.
    pub publication_id: u64,
    /// The applying actor.
    pub applicant_id: u64,
    /// Application message.
    pub message: String,
}

/// Body for creating a postulation.
#[derive(Debug, Serialize)]
struct NewPostulation {
    publication_id: u64,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_core::SignalSource;

    #[test]
    fn client_trims_trailing_slash() {
        let client = MarketClient::new("http://localhost:9090/");
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn client_preserves_url_without_slash() {
        let client = MarketClient::new("http://localhost:9090");
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn default_client_is_anonymous() {
        let client = MarketClient::new("http://localhost:9090");
        assert!(client.principal().is_anonymous());
    }

    #[test]
    fn builder_sets_principal() {
        let client = MarketClientBuilder::new("http://localhost:9090")
            .principal(Principal {
                actor_id: 7,
                source: SignalSource::Cookie,
            })
            .build()
            .unwrap();
        assert_eq!(client.principal().actor_id, 7);
    }
}
