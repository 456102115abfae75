#[cfg(test)]
pub mod test_utils {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::{get, post},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Request bodies received by the stub `/predict` route
    #[derive(Clone, Default)]
    pub struct Received {
        pub bodies: Arc<Mutex<Vec<Value>>>,
    }

    impl Received {
        pub fn last(&self) -> Option<Value> {
            self.bodies.lock().unwrap().last().cloned()
        }
    }

    async fn metadata() -> Json<Value> {
        Json(json!({
            "districts": ["A", "B"],
            "neighborhoods": ["X"]
        }))
    }

    /// Answers like the real backend, keyed on the district:
    /// "Unknown" is rejected, "Broken" gets an HTML gateway error,
    /// anything else gets a fixed estimate.
    async fn predict(State(received): State<Received>, Json(body): Json<Value>) -> Response {
        received.bodies.lock().unwrap().push(body.clone());

        match body["district"].as_str() {
            Some("Unknown") => (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Unknown district: Unknown"})),
            )
                .into_response(),
            Some("Broken") => (
                StatusCode::BAD_GATEWAY,
                "<html><body>502 Bad Gateway</body></html>",
            )
                .into_response(),
            _ => Json(json!({
                "prediction": 1234567.4,
                "details": {"xgb": 1000000.0, "cat": 0.0, "rf": 1250000.6},
                "success_rate": 86
            }))
            .into_response(),
        }
    }

    /// Stub of the prediction service
    pub fn stub_backend(received: Received) -> Router {
        Router::new()
            .route("/metadata", get(metadata))
            .route("/predict", post(predict))
            .with_state(received)
    }

    /// Stub whose metadata route reports missing encoders
    pub fn stub_backend_without_encoders() -> Router {
        Router::new().route(
            "/metadata",
            get(|| async { Json(json!({"error": "'NoneType' object is not subscriptable"})) }),
        )
    }

    /// Serve a router on an ephemeral local port and return its base URL
    pub async fn spawn_stub(router: Router) -> String {
        let _ = init_test_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let address = listener.local_addr().expect("Stub listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub server failed");
        });

        format!("http://{}", address)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
