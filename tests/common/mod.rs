#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use travelog::store::Store;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub struct TestApp {
    pub router: Router,
    pub store: Store,
    pub db: SqlitePool,
}

impl TestApp {
    /// Fresh in-memory database with the schema applied and no rows.
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        travelog::db::ensure_schema(&pool)
            .await
            .expect("Failed to run migrations");

        let store = Store::new(pool.clone());
        let router = travelog::build_app(store.clone(), HeaderValue::from_static(TEST_ORIGIN));

        Self {
            router,
            store,
            db: pool,
        }
    }

    /// Fresh database holding the startup sample data.
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        let inserted = travelog::seed::seed_if_empty(&app.db)
            .await
            .expect("Failed to seed");
        assert!(inserted);
        app
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// POST with a JSON content type and the given raw body.
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    pub async fn post_empty(&self, uri: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .body(Body::empty())
            .unwrap();
        self.request(req).await
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as JSON.
pub async fn body_json(resp: Response) -> serde_json::Value {
    let body = body_string(resp).await;
    serde_json::from_str(&body).unwrap()
}
