use super::common;

#[tokio::test]
async fn e2e_healthz_reports_ok() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let resp = reqwest::get(format!("{}/healthz", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", body);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["status"], "ok");

    server.abort();
}

#[tokio::test]
async fn e2e_index_serves_the_ui_page() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let resp = reqwest::get(&base).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);

    let body = resp.text().await.unwrap();
    assert!(body.contains("<textarea"));
    assert!(body.contains("/api/generate"));

    server.abort();
}
