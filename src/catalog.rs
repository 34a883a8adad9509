//! Product catalog proxy
//!
//! Forwards a GET to the third-party catalog and hands the body back
//! untouched. The upstream status code is not interpreted.

use std::time::Duration;

use axum::body::Bytes;
use thiserror::Error;

use crate::config::CatalogConfig;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        tracing::info!("Catalog proxy targeting {}", config.url);
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw catalog body
    pub async fn fetch_products(&self) -> Result<Bytes, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Catalog responded");
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::HeaderMap, routing::get};
    use tokio::net::TcpListener;

    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/products", addr)
    }

    fn config(url: String) -> CatalogConfig {
        CatalogConfig {
            url,
            timeout_ms: Some(2_000),
        }
    }

    #[tokio::test]
    async fn test_fetch_products_returns_body_verbatim() {
        let body = r#"[{"id":1,"title":"Backpack","price":109.95}]"#;
        let stub = Router::new().route("/products", get(move || async move { body }));
        let url = spawn_stub(stub).await;

        let client = CatalogClient::new(&config(url)).unwrap();
        let fetched = client.fetch_products().await.unwrap();
        assert_eq!(&fetched[..], body.as_bytes());
    }

    #[tokio::test]
    async fn test_fetch_products_sends_json_headers() {
        let url = spawn_stub(Router::new().route(
            "/products",
            get(|headers: HeaderMap| async move {
                headers
                    .get("accept")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        ))
        .await;

        let client = CatalogClient::new(&config(url)).unwrap();
        let fetched = client.fetch_products().await.unwrap();
        assert_eq!(&fetched[..], b"application/json");
    }

    #[tokio::test]
    async fn test_fetch_products_unreachable_upstream() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CatalogClient::new(&config(format!("http://{}/products", addr))).unwrap();
        assert!(matches!(
            client.fetch_products().await,
            Err(CatalogError::Request(_))
        ));
    }
}
