use std::collections::HashMap;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod transport;

pub use transport::{HttpTransport, Transport};

pub type Result<K, E = ClientError> = std::result::Result<K, E>;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: "http://localhost:8000/graphql".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a GraphQL response.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-empty `errors` list.
    #[error("{0}")]
    GraphQL(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

/// GraphQL client caching successful results in memory, keyed by query.
pub struct GraphQLClient<T> {
    transport: T,
    cache: RwLock<HashMap<String, serde_json::Value>>,
}

impl<T: Transport> GraphQLClient<T> {
    pub fn new(transport: T) -> GraphQLClient<T> {
        GraphQLClient {
            transport,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub async fn query<D: DeserializeOwned>(&self, query: &str) -> Result<D> {
        let key = cache_key(query);
        if let Some(data) = self.cached(&key) {
            debug!(query = %key, "Serving query from cache");
            return decode(data);
        }

        let response = self.transport.execute(query).await?;
        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            warn!(query = %key, "Query rejected: {}", message);
            return Err(ClientError::GraphQL(message));
        }

        let data = response
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| ClientError::UnexpectedResponse("missing data".to_owned()))?;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, data.clone());
        }
        decode(data)
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn cached(&self, key: &str) -> Option<serde_json::Value> {
        self.cache.read().ok()?.get(key).cloned()
    }
}

fn cache_key(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode<D: DeserializeOwned>(data: serde_json::Value) -> Result<D> {
    serde_json::from_value(data).map_err(|e| ClientError::UnexpectedResponse(e.to_string()))
}
