//! Integration tests for GET /booking/report

mod common;

#[cfg(test)]
mod report_tests {
    use super::common::*;
    use serde_json::Value;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "rooms", "reservations")))]
    async fn test_report_for_one_room(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(1, "alice");

        let response = server
            .get("/booking/report")
            .authorization_bearer(&token)
            .add_query_param("reserved_from", "2024-01-01T00:00:00Z")
            .add_query_param("reserved_to", "2024-01-02T00:00:00Z")
            .add_query_param("room_id", "1")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let path = body.as_str().expect("report response is a path string");

        // The file name encodes the query bounds.
        assert!(path.ends_with("2024-01-01T00-00-00_2024-01-02T00-00-00.docx"));
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        Ok(())
    }

    /// Without a room filter the report spans all rooms.
    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "rooms", "reservations")))]
    async fn test_report_without_room_filter(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(1, "alice");

        let response = server
            .get("/booking/report")
            .authorization_bearer(&token)
            .add_query_param("reserved_from", "2024-01-01T06:00:00Z")
            .add_query_param("reserved_to", "2024-01-01T18:00:00Z")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let path = body.as_str().unwrap();
        assert!(path.ends_with(".docx"));
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        Ok(())
    }

    /// A window with no reservations still produces a document with just
    /// the header row.
    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "rooms")))]
    async fn test_report_for_empty_window(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(1, "alice");

        let response = server
            .get("/booking/report")
            .authorization_bearer(&token)
            .add_query_param("reserved_from", "2030-01-01T00:00:00Z")
            .add_query_param("reserved_to", "2030-01-02T00:00:00Z")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(std::fs::metadata(body.as_str().unwrap()).unwrap().len() > 0);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "rooms")))]
    async fn test_report_requires_authentication(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/booking/report")
            .add_query_param("reserved_from", "2024-01-01T00:00:00Z")
            .add_query_param("reserved_to", "2024-01-02T00:00:00Z")
            .await;

        response.assert_status_forbidden();
        Ok(())
    }
}
