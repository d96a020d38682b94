use axum_test::TestServer;
use mrbs_server::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

#[allow(dead_code)]
pub const TEST_JWT_SECRET: &str = "test-secret-change-me-in-production";

/// Creates an AppState for the tests, with reports going to a temp
/// directory.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    let report_dir = std::env::temp_dir().join(format!("mrbs-reports-{}", std::process::id()));
    Arc::new(AppState::new(
        pool,
        TEST_JWT_SECRET.to_string(),
        report_dir,
    ))
}

/// Creates a TestServer around the full application router.
#[allow(dead_code)]
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = mrbs_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Generates a JWT token valid for 24 hours, matching the claims the
/// authentication middleware expects.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: i64, username: &str) -> String {
    mrbs_server::core::encode_jwt(username.to_string(), user_id, TEST_JWT_SECRET)
        .expect("Failed to create JWT token")
}
