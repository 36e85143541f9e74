//! HTTP client for the sales API.
//!
//! One GET per fetch through a shared agent with a fixed global timeout.
//! Any non-2xx status or timeout is a terminal failure for that interaction,
//! surfaced to the user and never retried.

use std::fmt;
use std::time::Duration;

use ureq::Agent;

use crate::loader::SourceKind;
use crate::record::SalesRecord;

/// Errors from the client layer
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    Status { code: u16 },
    /// The request never completed (connection refused, timeout, ...)
    Transport(String),
    /// The body was not a JSON array of records
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { code } => write!(f, "API request failed ({})", code),
            FetchError::Transport(msg) => write!(f, "request failed: {}", msg),
            FetchError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// The accumulated sidebar filters, sent as query parameters.
///
/// Text fields hold raw user input; empty means "not set" and is not sent.
/// `city`, `gender`, `payment`, `limit` and `offset` are transmitted even
/// though the backend does not consult them yet.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    pub source: SourceKind,
    pub product: String,
    pub city: String,
    pub gender: String,
    pub payment: String,
    pub limit: String,
    pub offset: String,
}

impl SalesFilter {
    /// Wire value of the source selector
    pub fn source_param(&self) -> &'static str {
        match self.source {
            SourceKind::Excel => "xlsx",
            SourceKind::Sql => "sql",
        }
    }

    /// Query pairs for the request; only non-empty fields are included
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("source", self.source_param().to_string())];

        for (key, value) in [
            ("product", &self.product),
            ("city", &self.city),
            ("gender", &self.gender),
            ("payment", &self.payment),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }

        for (key, value) in [("limit", &self.limit), ("offset", &self.offset)] {
            if let Ok(n) = value.trim().parse::<u64>()
                && n > 0
            {
                pairs.push((key, n.to_string()));
            }
        }

        pairs
    }
}

/// Sales API client
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the filtered dataset from `/api/sales`
    pub fn fetch_sales(&self, filter: &SalesFilter) -> Result<Vec<SalesRecord>, FetchError> {
        let url = format!("{}/api/sales", self.base_url);

        let mut request = self.agent.get(&url);
        for (key, value) in filter.query_pairs() {
            request = request.query(key, &value);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => FetchError::Status { code },
            other => FetchError::Transport(other.to_string()),
        })?;

        response
            .into_body()
            .read_json::<Vec<SalesRecord>>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
