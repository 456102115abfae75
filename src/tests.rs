#[cfg(test)]
mod integration_tests {
    use crate::cli::commands::estimate;
    use crate::client::PredictionClient;
    use crate::test_utils::test_utils::{
        spawn_stub, stub_backend, stub_backend_without_encoders, Received,
    };
    use common::{FormInput, PredictionOutcome};

    fn form(district: &str) -> FormInput {
        FormInput {
            room: "3".to_string(),
            living_room: "1".to_string(),
            area: "120".to_string(),
            floor: "2".to_string(),
            age: "10".to_string(),
            district: district.to_string(),
            neighborhood: "X".to_string(),
        }
    }

    #[tokio::test]
    async fn test_metadata_lists_options_in_order() {
        let base = spawn_stub(stub_backend(Received::default())).await;
        let client = PredictionClient::new(&base);

        let metadata = client.metadata().await.expect("Metadata request should succeed");

        assert_eq!(metadata.districts(), ["A".to_string(), "B".to_string()]);
        assert_eq!(metadata.neighborhoods(), ["X".to_string()]);
    }

    #[tokio::test]
    async fn test_metadata_error_body_yields_empty_lists() {
        let base = spawn_stub(stub_backend_without_encoders()).await;
        let client = PredictionClient::new(&base);

        let metadata = client.metadata().await.expect("Metadata request should succeed");

        assert!(metadata.districts().is_empty());
        assert!(metadata.neighborhoods().is_empty());
        assert!(metadata.error.is_some());
    }

    #[tokio::test]
    async fn test_metadata_unreachable_is_error() {
        // nothing listens on the discard port
        let client = PredictionClient::new("http://127.0.0.1:9");
        assert!(client.metadata().await.is_err());
    }

    #[tokio::test]
    async fn test_estimate_renders_board_and_chart() {
        let base = spawn_stub(stub_backend(Received::default())).await;
        let client = PredictionClient::new(&base);

        let estimate = estimate(&client, form("A")).await.expect("Prediction should succeed");

        let board = &estimate.board;
        assert_eq!(board.predicted_price.as_deref(), Some("1.234.567"));
        assert_eq!(board.xgb_price.as_deref(), Some("1.000.000 TL"));
        assert_eq!(board.cat_price, None);
        assert_eq!(board.rf_price.as_deref(), Some("1.250.001 TL"));
        assert_eq!(board.success_rate.as_deref(), Some("%86"));

        let [user, district, neighborhood] = estimate.chart.values();
        assert_eq!(user, 1234567.4);
        assert!(district >= user * 0.9 && district <= user * 1.1);
        assert!(neighborhood >= user * 0.95 && neighborhood <= user * 1.05);
    }

    #[tokio::test]
    async fn test_request_body_on_the_wire() {
        let received = Received::default();
        let base = spawn_stub(stub_backend(received.clone())).await;
        let client = PredictionClient::new(&base);

        let input = FormInput {
            area: "çok büyük".to_string(),
            room: " 4+1".to_string(),
            ..form("A")
        };
        estimate(&client, input).await.expect("Prediction should succeed");

        let body = received.last().expect("Stub should have received a body");
        assert!(body["area"].is_null());
        assert_eq!(body["room"], 4);
        assert_eq!(body["living_room"], 1);
        assert_eq!(body["district"], "A");
        assert_eq!(body["neighborhood"], "X");
    }

    #[tokio::test]
    async fn test_rejection_carries_detail() {
        let base = spawn_stub(stub_backend(Received::default())).await;
        let client = PredictionClient::new(&base);

        let outcome = client
            .predict(&form("Unknown").to_request())
            .await
            .expect("Rejection is not a transport error");
        assert_eq!(
            outcome,
            PredictionOutcome::Rejected {
                detail: "Unknown district: Unknown".to_string()
            }
        );

        let error = estimate(&client, form("Unknown"))
            .await
            .expect_err("Rejected prediction should fail");
        assert_eq!(error.to_string(), "Prediction failed: Unknown district: Unknown");
    }

    #[tokio::test]
    async fn test_unreadable_error_body_is_generic_failure() {
        let base = spawn_stub(stub_backend(Received::default())).await;
        let client = PredictionClient::new(&base);

        let error = client
            .predict(&form("Broken").to_request())
            .await
            .expect_err("HTML body should not decode");
        assert!(error.to_string().contains("Failed to parse response"));
    }
}
