#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{UpdateChecker, UpdateClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn checker_with(template: ResponseTemplate) -> (UpdateChecker, MockServer) {
        let server = MockServer::start().await;
        Mock::given(method("GET")).and(path("/latest.json")).respond_with(template).mount(&server).await;
        let client = UpdateClient::new(&format!("{}/latest.json", server.uri())).unwrap();
        (UpdateChecker::new(Some(client), "1.0.0"), server)
    }

    #[tokio::test]
    async fn test_check_now_records_available_update() {
        let (checker, _server) = checker_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "1.1.0"})),
        )
        .await;

        let status = checker.check_now(false).await;

        assert!(status.update_available);
        assert!(!status.is_checking);
        assert!(status.last_checked.is_some());
        assert_eq!(status.latest.map(|l| l.version), Some("1.1.0".to_owned()));
        assert_eq!(checker.status().await.current_version, "1.0.0");
    }

    #[tokio::test]
    async fn test_failure_clears_availability_without_error() {
        let (checker, _server) = checker_with(ResponseTemplate::new(500)).await;

        let status = checker.check_now(true).await;

        assert!(!status.update_available);
        assert!(status.latest.is_none());
        assert!(status.last_checked.is_none());
    }

    #[tokio::test]
    async fn test_disabled_checker_is_noop() {
        let checker = UpdateChecker::new(None, "1.0.0");

        let status = checker.check_now(false).await;

        assert!(!checker.is_enabled());
        assert!(!status.update_available);
        assert!(status.last_checked.is_none());
    }

    #[tokio::test]
    async fn test_periodic_check_runs_immediately() {
        let (checker, server) = checker_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "2.0.0"})),
        )
        .await;

        let handle = checker.spawn_periodic(Duration::from_secs(3600));
        for _ in 0..50 {
            if checker.status().await.last_checked.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        handle.abort();

        assert!(checker.status().await.update_available);
        assert_eq!(server.received_requests().await.map(|r| r.len()), Some(1));
    }

    #[tokio::test]
    async fn test_periodic_with_zero_interval_keeps_running() {
        let checker = UpdateChecker::new(None, "1.0.0");

        let handle = checker.spawn_periodic(Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!handle.is_finished(), "periodic task stopped");
        handle.abort();
        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_overlapping_checks_keep_is_checking_until_last_finishes() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"version": "1.0.0"});
        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body.clone())
                    .set_delay(Duration::from_millis(100)),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(body).set_delay(Duration::from_millis(800)),
            )
            .mount(&server)
            .await;
        let client = UpdateClient::new(&format!("{}/latest.json", server.uri())).unwrap();
        let checker = UpdateChecker::new(Some(client), "1.0.0");

        let fast = tokio::spawn({
            let checker = checker.clone();
            async move { checker.check_now(false).await }
        });
        tokio::time::sleep(Duration::from_millis(30)).await;
        let slow = tokio::spawn({
            let checker = checker.clone();
            async move { checker.check_now(false).await }
        });

        fast.await.unwrap();
        assert!(checker.status().await.is_checking, "second check still running");

        let done = slow.await.unwrap();
        assert!(!done.is_checking);
        assert!(!checker.status().await.is_checking);
    }
}
