use super::common;

#[tokio::test]
async fn e2e_invalid_json_returns_500_with_error_field() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (status, body) = common::post_generate_raw(&base, "not valid json").await;

    assert_eq!(status, 500);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(
        parsed["error"].as_str().is_some(),
        "expected an error field, received: {}",
        body
    );

    server.abort();
}

/// A JSON body missing the prompt field is unparseable for this endpoint and
/// maps to the same 500 as any other failure.
#[tokio::test]
async fn e2e_missing_prompt_field_returns_500() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (status, body) = common::post_generate_raw(&base, r#"{"message":"a button"}"#).await;

    assert_eq!(status, 500);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(parsed["error"].as_str().is_some(), "received: {}", body);

    server.abort();
}
