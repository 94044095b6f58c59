use tracing::debug;

use super::{ClientConfig, ClientError, RequestBody, ResponseBody, Result};

/// Carries one GraphQL query to a server and brings back its response body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, query: &str) -> Result<ResponseBody>;
}

pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<HttpTransport> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(HttpTransport {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, query: &str) -> Result<ResponseBody> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&RequestBody { query })
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // GraphQL errors may come back with a non-2xx status; prefer them when present.
        let parsed = serde_json::from_slice::<ResponseBody>(&bytes);
        if !status.is_success() && !matches!(&parsed, Ok(body) if !body.errors.is_empty()) {
            return Err(ClientError::Network(format!(
                "Response not successful: Received status code {}",
                status.as_u16()
            )));
        }
        parsed.map_err(|e| ClientError::UnexpectedResponse(e.to_string()))
    }
}
