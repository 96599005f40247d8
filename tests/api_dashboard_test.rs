//! Integration tests for the dashboard API endpoint

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

    fn summary_request() -> Request<Body> {
        Request::builder()
            .uri("/api/dashboard/summary")
            .body(Body::empty())
            .unwrap()
    }

    /// Tests every section is aggregated from its own read
    #[tokio::test]
    #[serial]
    async fn it_summarizes_the_host() {
        let mut server = mockito::Server::new_async().await;
        let _reservations = mock_json(
            &mut server,
            "POST",
            "/member/reservations/index",
            &fixture("host_reservations.json"),
        )
        .await;
        let _withdrawals = mock_json(
            &mut server,
            "POST",
            "/member/withdrawals/index",
            &fixture("withdrawals.json"),
        )
        .await;
        let _reviews = mock_json(
            &mut server,
            "POST",
            "/member/reviews/index",
            &fixture("reviews.json"),
        )
        .await;
        let _user = mock_json(&mut server, "POST", "/member/users/index", &fixture("user.json")).await;
        let app = test_app(&server.url());

        let response = app.oneshot(summary_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();

        let reservations = &body["reservations"];
        assert_eq!(reservations["state"], "success");
        assert_eq!(reservations["value"]["upcoming"], 1);
        assert_eq!(reservations["value"]["completed"], 2);
        assert_eq!(reservations["value"]["canceled"], 1);
        assert_eq!(reservations["value"]["earnings"], 240.5);
        assert_eq!(body["upcoming_today"]["state"], "success");
        assert!(body["upcoming_today"]["value"].is_array());

        let withdrawals = &body["withdrawals"]["value"];
        assert_eq!(withdrawals["pending"], 150.0);
        assert_eq!(withdrawals["completed"], 400.0);
        assert_eq!(withdrawals["canceled"], 500.0);

        let ratings = &body["ratings"]["value"];
        assert_eq!(ratings["stars"], serde_json::json!([0, 0, 1, 1, 1]));
        assert_eq!(ratings["average"], 4.0);

        assert_eq!(body["balance"]["value"], 1250.75);
    }

    /// Tests one failing read only fails its own section
    #[tokio::test]
    #[serial]
    async fn it_settles_sections_independently() {
        let mut server = mockito::Server::new_async().await;
        let _reservations = mock_json(
            &mut server,
            "POST",
            "/member/reservations/index",
            &fixture("host_reservations.json"),
        )
        .await;
        let _withdrawals = server
            .mock("POST", "/member/withdrawals/index")
            .with_status(500)
            .create_async()
            .await;
        let _reviews = mock_json(&mut server, "POST", "/member/reviews/index", "[]").await;
        let _user = mock_json(&mut server, "POST", "/member/users/index", &fixture("user.json")).await;
        let app = test_app(&server.url());

        let response = app.oneshot(summary_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
        assert_eq!(body["reservations"]["state"], "success");
        assert_eq!(body["withdrawals"]["state"], "error");
        assert_eq!(body["withdrawals"]["value"], "Error: 500");
        assert_eq!(body["ratings"]["value"]["count"], 0);
    }
}
