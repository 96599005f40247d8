//! Integration tests for the schedule search API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, fixture, mock_json, test_app};

    async fn search(uri: &str) -> (StatusCode, Value) {
        let mut server = mockito::Server::new_async().await;
        let _mock = mock_json(
            &mut server,
            "POST",
            "/member/schedules/search",
            &fixture("search_schedules.json"),
        )
        .await;
        let app = test_app(&server.url());

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = body_to_string(response.into_body()).await;
        (status, serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    fn ids(body: &Value) -> Vec<i64> {
        body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect()
    }

    /// Tests the default order is by rating and pages use the configured size
    #[tokio::test]
    #[serial]
    async fn it_pages_by_rating() {
        let (status, body) = search("/api/schedules/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![10, 7]);
        assert_eq!(body["total"], 4);
        assert_eq!(body["total_pages"], 2);

        let (_, body) = search("/api/schedules/search?page=2").await;
        assert_eq!(ids(&body), vec![8, 9]);
    }

    /// Tests a query combined with filters and a sort order
    #[tokio::test]
    #[serial]
    async fn it_filters_and_sorts() {
        let (status, body) = search("/api/schedules/search?q=siam&sort=2&per_page=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![8, 7, 9]);

        let (_, body) = search("/api/schedules/search?q=siam&charger=1&type=1&sort=5").await;
        assert_eq!(ids(&body), vec![9, 7]);

        let (_, body) = search("/api/schedules/search?vehicle=2").await;
        assert_eq!(ids(&body), vec![10]);
    }

    /// Tests a requested range has to fit inside the schedule window
    #[tokio::test]
    #[serial]
    async fn it_filters_by_requested_range() {
        let (_, body) = search(
            "/api/schedules/search?start=2024-01-02T08:00&end=2024-01-02T12:00&per_page=10",
        )
        .await;
        assert_eq!(ids(&body), vec![8, 9]);
    }

    /// Tests an unknown sort code is rejected
    #[tokio::test]
    #[serial]
    async fn it_rejects_unknown_codes() {
        let (status, _) = search("/api/schedules/search?sort=12").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
