use stencil::{template, Category};

use super::common;

#[tokio::test]
async fn e2e_modal_prompt_returns_modal_template() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (status, body) =
        common::post_generate_raw(&base, r#"{"prompt":"I need a modal dialog"}"#).await;

    assert_eq!(status, 200);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        parsed["code"].as_str().expect("code field"),
        template(Category::Modal)
    );

    server.abort();
}

#[tokio::test]
async fn e2e_unmatched_prompt_returns_default_template() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (status, body) = common::post_generate_raw(&base, r#"{"prompt":"xyz123"}"#).await;

    assert_eq!(status, 200);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        parsed["code"].as_str().expect("code field"),
        template(Category::Default)
    );

    server.abort();
}

/// Priority order survives the HTTP boundary: button is tested before card.
#[tokio::test]
async fn e2e_card_with_button_resolves_to_button() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (status, body) =
        common::post_generate_raw(&base, r#"{"prompt":"a card with a button"}"#).await;

    assert_eq!(status, 200);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        parsed["code"].as_str().expect("code field"),
        template(Category::Button)
    );

    server.abort();
}

/// Same prompt, two requests, byte-identical responses.
#[tokio::test]
async fn e2e_generate_is_deterministic_across_requests() {
    common::load_dotenv();
    let (base, server) = common::spawn_server().await;

    let (_, first) = common::post_generate_raw(&base, r#"{"prompt":"a signup form"}"#).await;
    let (_, second) = common::post_generate_raw(&base, r#"{"prompt":"a signup form"}"#).await;
    assert_eq!(first, second);

    server.abort();
}
