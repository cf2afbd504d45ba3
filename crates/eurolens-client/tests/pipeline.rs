//! End-to-end pipeline test: capture → normalize → analyze → history.

use std::sync::Arc;

use image::{DynamicImage, RgbImage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eurolens_client::{AnalysisClient, StaticLocation};
use eurolens_core::Classification;
use eurolens_image::{encode_jpeg_base64, resize_to_fit};
use eurolens_store::HistoryStore;

fn captured_photo() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(1600, 1200, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 241) as u8, 90])
    }))
}

#[tokio::test]
async fn capture_to_history_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/analyze-product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1001,
            "identified_product_name": "Hazelnut Spread",
            "identified_company": "Acme EU",
            "identified_headquarters": "IT",
            "raw_country": "Italy",
            "classification": "europeanCountry",
        })))
        .mount(&server)
        .await;

    // Normalize the captured photo the way the app does before upload.
    let resized = resize_to_fit(&captured_photo(), 768);
    assert_eq!(resized.width().max(resized.height()), 768);
    let payload = encode_jpeg_base64(&resized, 0.6).expect("normalized image should encode");

    let client = AnalysisClient::with_base_url(
        &server.uri(),
        30,
        "eurolens-test",
        Arc::new(StaticLocation::disabled()),
    )
    .unwrap();
    let result = client
        .analyze_image(&payload, None)
        .await
        .expect("analysis should succeed");

    assert_eq!(result.classification, Classification::EuropeanCountry);
    assert_eq!(result.identified_company.as_deref(), Some("Acme EU"));

    // The uploaded body carries exactly the normalized payload.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["image"], serde_json::Value::String(payload));

    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    store.add(result.clone()).unwrap();

    let items = store.all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].response, result);
}
