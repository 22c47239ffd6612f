//! Helpers for driving the full router in handler tests.

use crate::config::Config;
use crate::http::server::api_router;
use crate::http::ApiContext;
use crate::metrics::HitCounter;
use crate::models::MockStoreTrait;
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use std::sync::{Arc, Mutex, Once};
use time::OffsetDateTime;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: ApiContext,
}

impl TestApp {
    pub fn new(store: MockStoreTrait) -> Self {
        Self::with_platform(store, "prod")
    }

    pub fn with_platform(store: MockStoreTrait, platform: &str) -> Self {
        let config = Config {
            database_url: "postgres://unused".to_string(),
            platform: platform.to_string(),
            filepath_root: env!("CARGO_MANIFEST_DIR").into(),
            ..Default::default()
        };

        Self {
            ctx: ApiContext {
                config: Arc::new(config),
                store: Arc::new(store),
                hits: Arc::new(HitCounter::new()),
            },
        }
    }

    pub fn router(&self) -> Router {
        api_router(self.ctx.clone())
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// A fixed, recognisable timestamp for records returned by mocks.
pub fn timestamp() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

/// Records every log line emitted while tests run.
///
/// Tests share one process-wide logger, so callers should filter by target or message
/// rather than expect the buffer to hold only their own records.
struct CapturingLogger;

static CAPTURED: Mutex<Vec<(String, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED
            .lock()
            .unwrap()
            .push((record.target().to_string(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&CapturingLogger).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// `(target, message)` pairs logged so far that satisfy `filter`.
pub fn captured_logs(filter: impl Fn(&str, &str) -> bool) -> Vec<(String, String)> {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|(target, message)| filter(target, message))
        .cloned()
        .collect()
}
