pub mod mock;

use actix_web::{App, HttpServer, web};
use mock::{MockBackend, MockResponse};
use payloads::config::ClientConfig;
use payloads::{APIClient, MemoryTokenStore, Token, TokenStore};
use reqwest::StatusCode;
use std::net::TcpListener;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

pub const TEST_TOKEN: &str = "test-token";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub backend: web::Data<MockBackend>,
    pub tokens: Arc<MemoryTokenStore>,
    pub client: APIClient,
}

impl TestApp {
    pub fn mock(&self, method: &str, path: &str, response: MockResponse) {
        self.backend.mock(method, path, response);
    }

    /// Store a token as if the user had logged in.
    pub fn login(&self) {
        self.tokens.store_token(Token::new(TEST_TOKEN));
    }

    pub fn logout(&self) {
        self.client.logout();
    }

    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

/// Subscriber honouring `RUST_LOG`, falling back to `default_filter`.
pub fn get_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).finish()
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = get_subscriber("error");
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let backend = web::Data::new(MockBackend::default());

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).unwrap();
    let port = listener.local_addr().unwrap().port();
    let server_backend = backend.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_backend.clone())
            .default_service(web::to(mock::serve))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    tokio::spawn(server);

    let tokens = Arc::new(MemoryTokenStore::default());
    let config = ClientConfig::new(format!("http://127.0.0.1:{port}"));

    TestApp {
        port,
        backend,
        client: APIClient::new(&config, tokens.clone()),
        tokens,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Spawn the backend with a token already stored.
pub async fn spawn_logged_in_app() -> TestApp {
    let app = spawn_app().await;
    app.login();
    app
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
