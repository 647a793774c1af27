#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use std::sync::Arc;
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::memory::InMemoryUrlRepository;
use url_shortener::api::routes::public_routes;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "sho.rt";

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(repository.clone(), 30, false);

    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let app = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    (server, repository)
}

/// Server over the full application router, middleware included.
pub fn create_app_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    (server, repository)
}

pub async fn create_test_link(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    let record = UrlRecord::new(url.to_string(), Utc::now() + Duration::minutes(30), true);
    assert!(repo.insert_if_absent(code, record).await.unwrap());
}

pub async fn create_expired_link(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    let record = UrlRecord::new(url.to_string(), Utc::now() - Duration::minutes(1), false);
    assert!(repo.insert_if_absent(code, record).await.unwrap());
}
