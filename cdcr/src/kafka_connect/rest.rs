use crate::connector::config::ConnectorConfig;
use crate::connector::status::ConnectorStatus;
use crate::error::upstream::UpstreamError;
use crate::error::{CDCRError, CDCRResult};
use crate::kafka_connect::client::ConnectorClient;
use crate::kafka_connect::config::KafkaConnectConfig;
use crate::kafka_connect::transport::{HttpTransport, TransportResponse};
use async_trait::async_trait;
use log::info;
use reqwest::Url;

/// `ConnectorClient` backed by the Kafka Connect REST API.
pub struct KafkaConnectClient {
    base_url: Url,
    transport: HttpTransport,
}

impl KafkaConnectClient {
    pub fn new(config: &KafkaConnectConfig) -> CDCRResult<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|err| CDCRError::InvalidUrlError(format!("{}: {}", config.url, err)))?;
        if base_url.cannot_be_a_base() {
            return Err(CDCRError::InvalidUrlError(config.url.clone()));
        }

        Ok(KafkaConnectClient {
            base_url,
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base path, percent-encoding each one so a
    /// connector name can never add path segments, a query or a fragment.
    fn url_for(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    fn connectors_url(&self) -> String {
        self.url_for(&["connectors"])
    }

    fn connector_url(&self, name: &str) -> String {
        self.url_for(&["connectors", name])
    }

    fn connector_status_url(&self, name: &str) -> String {
        self.url_for(&["connectors", name, "status"])
    }
}

fn transport_error(operation: &'static str, name: Option<&str>, err: reqwest::Error) -> CDCRError {
    UpstreamError::new(operation, name, None, err.to_string()).into()
}

fn status_error(
    operation: &'static str,
    name: Option<&str>,
    response: TransportResponse,
) -> CDCRError {
    UpstreamError::new(operation, name, Some(response.status), response.body).into()
}

fn decode_error(operation: &'static str, name: Option<&str>, err: serde_json::Error) -> CDCRError {
    UpstreamError::new(
        operation,
        name,
        None,
        format!("unexpected response body: {}", err),
    )
    .into()
}

#[async_trait]
impl ConnectorClient for KafkaConnectClient {
    async fn list(&self) -> CDCRResult<Vec<String>> {
        let response = self
            .transport
            .get(&self.connectors_url())
            .await
            .map_err(|err| transport_error("list", None, err))?;

        if !response.is_success() {
            return Err(status_error("list", None, response));
        }

        serde_json::from_str(&response.body).map_err(|err| decode_error("list", None, err))
    }

    async fn create(&self, config: &ConnectorConfig) -> CDCRResult<()> {
        let name = Some(config.name.as_str());
        let body = serde_json::to_string(config)?;
        let response = self
            .transport
            .post(&self.connectors_url(), body)
            .await
            .map_err(|err| transport_error("create", name, err))?;

        if !response.is_success() {
            return Err(status_error("create", name, response));
        }

        info!("Connector {} submitted to {}", config.name, self.base_url);
        Ok(())
    }

    async fn status(&self, name: &str) -> CDCRResult<ConnectorStatus> {
        let response = self
            .transport
            .get(&self.connector_status_url(name))
            .await
            .map_err(|err| transport_error("status", Some(name), err))?;

        if response.is_not_found() {
            return Err(CDCRError::NotFoundError(name.to_string()));
        }
        if !response.is_success() {
            return Err(status_error("status", Some(name), response));
        }

        serde_json::from_str(&response.body).map_err(|err| decode_error("status", Some(name), err))
    }

    async fn delete(&self, name: &str) -> CDCRResult<()> {
        let response = self
            .transport
            .delete(&self.connector_url(name))
            .await
            .map_err(|err| transport_error("delete", Some(name), err))?;

        if response.is_not_found() {
            info!("Connector {} was already absent", name);
            return Ok(());
        }
        if !response.is_success() {
            return Err(status_error("delete", Some(name), response));
        }

        info!("Connector {} deleted", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    #[derive(Debug, Clone)]
    struct RecordedRequest {
        method: String,
        path: String,
        body: String,
    }

    /// Minimal stand-in for Kafka Connect: answers every connection with the
    /// next canned response, repeating the last one once they run out.
    struct FakeManager {
        url: String,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl FakeManager {
        async fn start(responses: Vec<(u16, &'static str)>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let requests = Arc::new(Mutex::new(Vec::new()));
            let recorded = requests.clone();

            tokio::spawn(async move {
                let mut responses = responses.into_iter();
                let mut current = (200, "");
                while let Ok((mut socket, _)) = listener.accept().await {
                    let request = read_request(&mut socket).await;
                    recorded.lock().unwrap().push(request);
                    if let Some(next) = responses.next() {
                        current = next;
                    }
                    let (status, body) = current;
                    let response = format!(
                        "HTTP/1.1 {} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                }
            });

            FakeManager {
                url: format!("http://{}", addr),
                requests,
            }
        }

        fn client(&self, retry_count: u32) -> KafkaConnectClient {
            let config = KafkaConnectConfig::new(
                format!("{}/", self.url),
                Duration::from_secs(5),
                retry_count,
                Duration::from_millis(1),
            );
            KafkaConnectClient::new(&config).unwrap()
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn read_request(socket: &mut TcpStream) -> RecordedRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break buf.len();
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
        RecordedRequest {
            method: request_line.next().unwrap_or_default().to_string(),
            path: request_line.next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
        }
    }

    #[tokio::test]
    async fn test_list() {
        let manager = FakeManager::start(vec![(200, r#"["a","b"]"#)]).await;
        let connectors = manager.client(0).list().await.unwrap();
        assert_eq!(connectors, vec!["a".to_string(), "b".to_string()]);

        let requests = manager.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/connectors");
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let manager = FakeManager::start(vec![(500, "broken")]).await;
        match manager.client(0).list().await {
            Err(CDCRError::UpstreamError(err)) => {
                assert_eq!(err.operation, "list");
                assert_eq!(err.status, Some(500));
                assert_eq!(err.message, "broken");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_undecodable_body() {
        let manager = FakeManager::start(vec![(200, "not json")]).await;
        assert!(matches!(
            manager.client(0).list().await,
            Err(CDCRError::UpstreamError(_))
        ));
    }

    #[tokio::test]
    async fn test_retries_server_errors() {
        let manager = FakeManager::start(vec![(503, ""), (200, r#"["a"]"#)]).await;
        let connectors = manager.client(1).list().await.unwrap();
        assert_eq!(connectors, vec!["a".to_string()]);
        assert_eq!(manager.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let manager = FakeManager::start(vec![(400, r#"{"message":"bad"}"#)]).await;
        assert!(manager.client(3).list().await.is_err());
        assert_eq!(manager.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_create_posts_config() {
        let manager = FakeManager::start(vec![(201, "{}")]).await;
        let mut config = BTreeMap::new();
        config.insert("connector.class".to_string(), "X".to_string());
        let config = ConnectorConfig::new("shop-connector", config);

        manager.client(0).create(&config).await.unwrap();

        let requests = manager.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/connectors");
        let sent: ConnectorConfig = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(sent, config);
    }

    #[tokio::test]
    async fn test_create_rejected() {
        let manager = FakeManager::start(vec![(409, r#"{"error_code":409}"#)]).await;
        let config = ConnectorConfig::new("shop-connector", BTreeMap::new());
        match manager.client(0).create(&config).await {
            Err(CDCRError::UpstreamError(err)) => {
                assert_eq!(err.operation, "create");
                assert_eq!(err.connector.as_deref(), Some("shop-connector"));
                assert_eq!(err.status, Some(409));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status() {
        let body = r#"{"name":"shop","connector":{"state":"RUNNING","worker_id":"w1"},"tasks":[]}"#;
        let manager = FakeManager::start(vec![(200, body)]).await;
        let status = manager.client(0).status("shop").await.unwrap();
        assert_eq!(status.connector.state, "RUNNING");
        assert_eq!(manager.requests()[0].path, "/connectors/shop/status");
    }

    #[tokio::test]
    async fn test_status_not_found() {
        let manager = FakeManager::start(vec![(404, r#"{"error_code":404}"#)]).await;
        assert!(matches!(
            manager.client(0).status("missing").await,
            Err(CDCRError::NotFoundError(name)) if name == "missing"
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let manager = FakeManager::start(vec![(204, ""), (404, ""), (500, "")]).await;
        let client = manager.client(0);

        assert!(client.delete("shop").await.is_ok());
        assert!(client.delete("shop").await.is_ok());
        assert!(matches!(
            client.delete("shop").await,
            Err(CDCRError::UpstreamError(_))
        ));

        let requests = manager.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/connectors/shop");
    }

    #[tokio::test]
    async fn test_connector_names_are_percent_encoded() {
        let manager = FakeManager::start(vec![(204, "")]).await;
        let client = manager.client(0);

        client.delete("orders#v2").await.unwrap();
        client.delete("a/b").await.unwrap();
        client.delete("q?x=1").await.unwrap();
        let _ = client.status("a b").await;

        let paths: Vec<String> = manager.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/connectors/orders%23v2".to_string(),
                "/connectors/a%2Fb".to_string(),
                "/connectors/q%3Fx=1".to_string(),
                "/connectors/a%20b/status".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_kept() {
        let manager = FakeManager::start(vec![(200, "[]")]).await;
        let config = KafkaConnectConfig::new(
            format!("{}/kafka-connect/", manager.url),
            Duration::from_secs(5),
            0,
            Duration::from_millis(1),
        );
        KafkaConnectClient::new(&config).unwrap().list().await.unwrap();
        assert_eq!(manager.requests()[0].path, "/kafka-connect/connectors");
    }

    #[test]
    fn test_invalid_base_url() {
        for url in ["not a url", "mailto:connect@example.com"] {
            let config = KafkaConnectConfig {
                url: url.to_string(),
                ..KafkaConnectConfig::default()
            };
            assert!(matches!(
                KafkaConnectClient::new(&config),
                Err(CDCRError::InvalidUrlError(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_create_is_not_retried() {
        let manager = FakeManager::start(vec![(503, "busy"), (201, "{}")]).await;
        let config = ConnectorConfig::new("shop-connector", BTreeMap::new());
        match manager.client(3).create(&config).await {
            Err(CDCRError::UpstreamError(err)) => assert_eq!(err.status, Some(503)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(manager.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_manager() {
        let config = KafkaConnectConfig::new(
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(2),
            0,
            Duration::from_millis(1),
        );
        let client = KafkaConnectClient::new(&config).unwrap();
        match client.list().await {
            Err(CDCRError::UpstreamError(err)) => assert_eq!(err.status, None),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
