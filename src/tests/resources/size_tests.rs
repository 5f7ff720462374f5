use crate::{NodeDriver, SizeExtra, UpcloudError, tests::create_test_client};
use reqwest::StatusCode;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_list_sizes_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/1.2/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "plans": {
                "plan": [
                    {
                        "core_number": 1,
                        "memory_amount": 1024,
                        "name": "1xCPU-1GB",
                        "public_traffic_out": 2048,
                        "storage_size": 30,
                        "storage_tier": "maxiops"
                    },
                    {
                        "core_number": 6,
                        "memory_amount": 8192,
                        "name": "6xCPU-8GB",
                        "public_traffic_out": 9216,
                        "storage_size": 200,
                        "storage_tier": "maxiops"
                    }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let sizes = client.list_sizes().await.unwrap();
    assert_eq!(sizes.len(), 2);

    let size = &sizes[1];
    assert_eq!(size.id, "6xCPU-8GB");
    assert_eq!(size.name, "6xCPU-8GB");
    assert_eq!(size.ram, 8192);
    assert_eq!(size.disk, 200);
    assert_eq!(size.bandwidth, 9216);
    assert_eq!(size.price, None);
    assert_eq!(
        size.extra,
        SizeExtra {
            core_number: 6,
            storage_tier: "maxiops".to_string()
        }
    );
}

#[tokio::test]
async fn test_list_sizes_server_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let vendor_error = serde_json::json!({
        "error": {
            "error_code": "INTERNAL_ERROR",
            "error_message": "Internal error."
        }
    });

    Mock::given(method("GET"))
        .and(path("/1.2/plan"))
        .respond_with(ResponseTemplate::new(500).set_body_json(&vendor_error))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client.list_sizes().await.unwrap_err();
    assert_eq!(err.error_code(), Some("INTERNAL_ERROR"));
    match err {
        UpcloudError::Api { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, vendor_error);
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
