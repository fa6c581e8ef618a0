//! Test harness that drives the HTTP router in-process.
//!
//! Every test gets its own freshly seeded roster, so mutations never leak
//! between tests. Requests go straight through the router with
//! `tower::ServiceExt::oneshot`; no socket is opened.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use roster_core::domains::activities::{Roster, RosterStore};
use roster_core::server::build_app;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness holding a roster store and the router built around it.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/activities").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Store shared with the router - use this to inspect state directly.
    pub store: RosterStore,
    router: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_store(RosterStore::seeded())
    }

    async fn teardown(self) {
        // Roster is dropped with the harness
    }
}

impl TestHarness {
    pub fn with_store(store: RosterStore) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let router = build_app(store.clone());
        Self { store, router }
    }

    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> TestResponse {
        self.request(Method::POST, &activity_uri(activity, "signup", email))
            .await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> TestResponse {
        self.request(Method::DELETE, &activity_uri(activity, "participant", email))
            .await
    }

    /// Participants of `activity` as reported by `GET /activities`.
    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.get("/activities").await.json();
        serde_json::from_value(activities[activity]["participants"].clone())
            .expect("participants should be a list of emails")
    }

    pub async fn snapshot(&self) -> Roster {
        self.store.list_activities().await
    }
}

/// Build `/activities/{activity}/{action}?email={email}` with both parts
/// percent-encoded.
pub fn activity_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}
