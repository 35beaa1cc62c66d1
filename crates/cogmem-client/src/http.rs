//! reqwest-backed transport.

use async_trait::async_trait;
use cogmem_types::{ApiRequest, ApiResponse, CogmemError, HttpMethod, Transport, TransportError};

/// Sends requests over HTTP(S) with a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, CogmemError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cogmem-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CogmemError::Configuration(format!("HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxies, custom TLS roots).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut req = self.client.request(to_reqwest_method(request.method), url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            req = req.body(body.to_string());
        }
        let res = req.send().await.map_err(classify)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(classify)?;
        Ok(ApiResponse { status, body })
    }
}
