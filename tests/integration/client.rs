//! Client wrapper integration tests
//!
//! The client is pointed either at a wiremock stand-in for the proxy or at a
//! real proxy backed by the Gemini mock.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Cursor;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use wordquest::actions::{LearnedWord, StoryPage, Theme, WordLookup};
use wordquest::{ClientError, ProxyClient};

use crate::common::{config_without_credentials, spawn_proxy, test_config};
use crate::mocks::gemini::{MockGemini, IMAGE_MODEL, SPEECH_MODEL, TEXT_MODEL};

fn png_data_url(width: u32, height: u32) -> String {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 40, 40, 255]),
    ));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    format!("data:image/png;base64,{}", BASE64.encode(bytes.into_inner()))
}

async fn mock_proxy(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/gemini"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

async fn sent_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

// ============================================================================
// Against a mocked proxy
// ============================================================================

#[tokio::test]
async fn test_blank_speech_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = ProxyClient::new(&server.uri());

    assert_eq!(assert_ok!(client.generate_speech("  ").await), None);
    assert_eq!(assert_ok!(client.generate_speech("").await), None);
}

#[tokio::test]
async fn test_server_error_includes_status() {
    let server = mock_proxy(500, json!({ "error": "Gemini API error 503" })).await;
    let client = ProxyClient::new(&server.uri());

    let err = assert_err!(client.lookup_word_definition("brave", "a brave fox", "5-7").await);

    assert!(matches!(err, ClientError::Server { status: 500, .. }));
    let message = err.to_string();
    assert!(message.starts_with("Server error: 500"), "{}", message);
    assert!(message.contains("Gemini API error 503"));
}

#[tokio::test]
async fn test_identify_object_resizes_and_strips_prefix() {
    let server = mock_proxy(200, json!({ "word": "Apple", "matchesTheme": false })).await;
    let client = ProxyClient::new(&server.uri());
    let theme = Theme {
        id: Some("round".to_string()),
        label: Some("Round Things".to_string()),
        description: None,
    };

    let result = assert_ok!(client.identify_object(&png_data_url(1600, 800), Some(&theme)).await);
    assert_eq!(result.word.as_deref(), Some("Apple"));
    assert_eq!(result.matches_theme, Some(false));

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["action"], "identifyObject");
    assert_eq!(bodies[0]["theme"]["label"], "Round Things");

    let sent = bodies[0]["imageBase64"].as_str().unwrap();
    assert!(!sent.starts_with("data:"));
    let decoded = image::load_from_memory(&BASE64.decode(sent).unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 400));
    assert_eq!(
        image::guess_format(&BASE64.decode(sent).unwrap()).unwrap(),
        ImageFormat::Jpeg
    );
}

#[tokio::test]
async fn test_sticker_resizes_to_512() {
    let server = mock_proxy(200, json!({ "imageBase64": "data:image/png;base64,AAAA" })).await;
    let client = ProxyClient::new(&server.uri());

    let sticker = assert_ok!(client.generate_sticker(&png_data_url(600, 1200), "Ball").await);
    assert_eq!(sticker.as_deref(), Some("data:image/png;base64,AAAA"));

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies[0]["word"], "Ball");
    let sent = BASE64
        .decode(bodies[0]["imageBase64"].as_str().unwrap())
        .unwrap();
    let decoded = image::load_from_memory(&sent).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (256, 512));
}

#[tokio::test]
async fn test_undecodable_image_is_sent_without_prefix() {
    let server = mock_proxy(200, json!({ "imageBase64": null })).await;
    let client = ProxyClient::new(&server.uri());

    let sticker = assert_ok!(
        client
            .generate_sticker("data:image/webp;base64,bm90IGFuIGltYWdl", "Cat")
            .await
    );
    assert_eq!(sticker, None);

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies[0]["imageBase64"], "bm90IGFuIGltYWdl");
}

// ============================================================================
// End to end: client -> proxy -> mocked Gemini
// ============================================================================

#[tokio::test]
async fn test_end_to_end_lookup_word() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_text(
            TEXT_MODEL,
            "```\n{\"definition\":\"Very big.\",\"funFact\":\"Whales are huge.\",\"emoji\":\"🐋\",\"visualDetail\":\"a whale\"}\n```",
        )
        .await;
    let client = ProxyClient::new(&spawn_proxy(test_config(&gemini.uri())).await);

    let lookup = assert_ok!(client.lookup_word_definition("huge", "a huge whale", "6").await);

    assert_eq!(
        lookup,
        WordLookup {
            definition: Some("Very big.".to_string()),
            fun_fact: Some("Whales are huge.".to_string()),
            emoji: Some("🐋".to_string()),
            visual_detail: Some("a whale".to_string()),
        }
    );
}

#[tokio::test]
async fn test_end_to_end_story() {
    let gemini = MockGemini::start().await;
    gemini
        .mock_text(
            TEXT_MODEL,
            r#"{"title":"The Red Ball","mainCharacterVisual":"a puppy","pages":[{"pageNumber":1,"text":"Bounce!"}]}"#,
        )
        .await;
    let client = ProxyClient::new(&spawn_proxy(test_config(&gemini.uri())).await);

    let story = assert_ok!(
        client
            .generate_story_content(
                &[LearnedWord::new("ball")],
                &Theme {
                    label: Some("Colors".to_string()),
                    ..Default::default()
                },
                &json!({ "name": "Sam" }),
                None,
            )
            .await
    );

    assert_eq!(story.title.as_deref(), Some("The Red Ball"));
    assert_eq!(
        story.pages,
        vec![StoryPage {
            page_number: Some(1),
            text: Some("Bounce!".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_end_to_end_speech_and_illustration() {
    let gemini = MockGemini::start().await;
    gemini.mock_inline(SPEECH_MODEL, "audio/L16;rate=24000", "AAEC").await;
    gemini.mock_inline(IMAGE_MODEL, "image/png", "iVBOR").await;
    let client = ProxyClient::new(&spawn_proxy(test_config(&gemini.uri())).await);

    let audio = assert_ok!(client.generate_speech("Hello").await);
    assert_eq!(audio.as_deref(), Some("AAEC"));

    let image = assert_ok!(
        client
            .generate_illustration("jumping", "crayon", "a green frog")
            .await
    );
    assert_eq!(image.as_deref(), Some("data:image/png;base64,iVBOR"));
}

#[tokio::test]
async fn test_end_to_end_missing_credentials() {
    let gemini = MockGemini::start().await;
    let client = ProxyClient::new(&spawn_proxy(config_without_credentials(&gemini.uri())).await);

    let err = assert_err!(client.generate_speech("Hello").await);

    match err {
        ClientError::Server { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("Server missing GEMINI_API_KEY"));
        }
        other => panic!("unexpected error: {}", other),
    }
}
