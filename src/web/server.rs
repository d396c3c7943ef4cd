//! Web server for MailAssist.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::{MailAssistError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Server configuration.
    config: ServerConfig,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, app_state: AppState) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| {
                MailAssistError::Config(format!(
                    "invalid server address {}:{}: {}",
                    config.host, config.port, e
                ))
            })?;

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            config: config.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server until Ctrl-C is received.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Run the web server until `shutdown` completes.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = create_router(self.app_state, &self.config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Web server stopped");
        Ok(())
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr> {
        let router = create_router(self.app_state, &self.config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::reply::CompletionProvider;
    use crate::Database;
    use async_trait::async_trait;

    struct FixedProvider;

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("fixed".to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn create_test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            ..ServerConfig::default()
        }
    }

    async fn create_state() -> AppState {
        let db = Database::open_in_memory().await.unwrap();
        AppState::new(
            db,
            Arc::new(TokenService::new("test-secret-key", 7)),
            Arc::new(FixedProvider),
        )
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let server = WebServer::new(&create_test_config(), create_state().await).unwrap();
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..create_test_config()
        };
        let result = WebServer::new(&config, create_state().await);
        assert!(matches!(result, Err(MailAssistError::Config(_))));
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let server = WebServer::new(&create_test_config(), create_state().await).unwrap();
        let addr = server.run_with_addr().await.unwrap();

        let client = reqwest::Client::new();
        let resp = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_web_server_graceful_shutdown() {
        let server = WebServer::new(&create_test_config(), create_state().await).unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(server.run_until(async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
