use crate::error::CDCRResult;
use crate::kafka_connect::config::KafkaConnectConfig;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// JSON over HTTP with a per-request timeout. For GET and DELETE, connection
/// failures, timeouts and 5xx answers are retried. POST is sent once: a
/// create that timed out may still have been applied by the manager.
pub struct HttpTransport {
    client: Client,
    retry_count: u32,
    retry_wait: Duration,
}

impl HttpTransport {
    pub fn new(config: &KafkaConnectConfig) -> CDCRResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(HttpTransport {
            client,
            retry_count: config.retry_count,
            retry_wait: config.retry_wait,
        })
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<TransportResponse> {
        self.send(Method::GET, url, None).await
    }

    pub async fn post(&self, url: &str, body: String) -> reqwest::Result<TransportResponse> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn delete(&self, url: &str) -> reqwest::Result<TransportResponse> {
        self.send(Method::DELETE, url, None).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> reqwest::Result<TransportResponse> {
        let mut attempt = 0;
        loop {
            debug!("--> {} {}", method, url);
            let result = self.send_once(method.clone(), url, body.clone()).await;

            let failed = match &result {
                Ok(response) => {
                    debug!("<-- {} {} {}", response.status, method, url);
                    response.status >= 500
                }
                Err(err) => {
                    debug!("<-- {} {} failed: {}", method, url, err);
                    true
                }
            };
            let retryable = failed && is_idempotent(&method);

            if !retryable || attempt >= self.retry_count {
                return result;
            }

            attempt += 1;
            warn!(
                "Retrying {} {} ({}/{}) in {:?}",
                method, url, attempt, self.retry_count, self.retry_wait
            );
            tokio::time::sleep(self.retry_wait).await;
        }
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> reqwest::Result<TransportResponse> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

fn is_idempotent(method: &Method) -> bool {
    *method == Method::GET || *method == Method::DELETE
}
