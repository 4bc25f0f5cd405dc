#[cfg(test)]
mod tests {
    use crate::client::UpdateClient;
    use crate::error::UpdateError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_manifest(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> UpdateClient {
        UpdateClient::new(&format!("{}/latest.json", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_newer_version_is_reported() {
        let server = MockServer::start().await;
        mount_manifest(
            &server,
            serde_json::json!({"version": "v0.2.0", "notes": "Nueva vista", "pub_date": "2025-03-01T00:00:00Z"}),
        )
        .await;

        let info = client_for(&server).check("0.1.0").await.unwrap().unwrap();

        assert_eq!(info.version, "v0.2.0");
        assert_eq!(info.notes.as_deref(), Some("Nueva vista"));
    }

    #[tokio::test]
    async fn test_same_or_older_version_is_none() {
        let server = MockServer::start().await;
        mount_manifest(&server, serde_json::json!({"version": "0.1.0"})).await;
        let client = client_for(&server);

        assert!(client.check("0.1.0").await.unwrap().is_none());
        assert!(client.check("0.3.1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_transient() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server).check("0.1.0").await.unwrap_err();

        assert!(matches!(err, UpdateError::ManifestStatus { status: 503, .. }));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_malformed_manifest_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).check("0.1.0").await.unwrap_err();

        assert!(matches!(err, UpdateError::MalformedManifest { .. }));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_bad_version_in_manifest() {
        let server = MockServer::start().await;
        mount_manifest(&server, serde_json::json!({"version": "latest"})).await;

        let err = client_for(&server).check("0.1.0").await.unwrap_err();

        assert!(matches!(err, UpdateError::InvalidVersion(_)));
    }
}
