//! Integration tests for the endpoint wrappers against a mock server.
//!
//! Covers URL/verb/body construction per endpoint, the strict 200 success
//! contract, card selector priority, and the token webhook lookup.

mod common;

use common::{harness, send_log};
use trello_api::{BoardsQuery, CardUpdate, CardsFilter, NewCard, NewWebhook, QueryParams};
use trello_core::TrelloError;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ---- Request primitive ----

#[tokio::test]
async fn get_card_builds_url_and_decodes() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/cards/abc123"))
        .and(query_param("key", "K"))
        .and(query_param("token", "T"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc123","name":"Test"}"#))
        .expect(1)
        .mount(&h.server)
        .await;

    let card = h.client.get_card("abc123").await.unwrap();
    assert_eq!(card.id, "abc123");
    assert_eq!(card.name, "Test");

    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("key=K&token=T"));
}

#[tokio::test]
async fn non_200_returns_raw_body() {
    let h = harness().await;
    let raw = "invalid token\n  <with> odd \u{e9} bytes ";
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(raw))
        .mount(&h.server)
        .await;

    let err = h.client.get_card("abc123").await.unwrap_err();
    match err {
        TrelloError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, raw);
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn every_non_200_status_is_an_error() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/b1/lists"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1/boards/b1/members"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&h.server)
        .await;

    let err = h.client.get_lists("b1").await.unwrap_err();
    assert_eq!(err.status(), Some(204));

    let err = h.client.get_board_members("b1").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(matches!(err, TrelloError::Api { ref message, .. } if message == "down"));
}

#[tokio::test]
async fn raw_request_defaults_to_get() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/search"))
        .and(query_param("query", "release notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut query = QueryParams::new();
    query.push("query", "release notes");
    let body = h.client.request("search", &query, None, None).await.unwrap();
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn request_and_response_are_logged() {
    let h = harness().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"m1","username":"ana"}"#))
        .mount(&h.server)
        .await;

    h.client.get_me().await.unwrap();

    let log = send_log(&h);
    assert!(log.contains(" GET: "));
    assert!(log.contains("/1/members/me?key=K&token=T"));
    assert!(log.contains("Response: \n"));
    assert!(log.contains("\"username\": \"ana\""));
    assert!(log.ends_with("\n\n"));
}

#[tokio::test]
async fn undecodable_200_is_serialization_error() {
    let h = harness().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&h.server)
        .await;

    let err = h.client.get_member("m1").await.unwrap_err();
    assert!(matches!(err, TrelloError::Serialization(_)));
}

// ---- Boards / members ----

#[tokio::test]
async fn boards_default_to_current_member() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/members/me/boards"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"id":"b1","name":"Roadmap"}]"#),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let boards = h.client.get_boards(&BoardsQuery::default()).await.unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name, "Roadmap");

    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("key=K&token=T"));
}

#[tokio::test]
async fn boards_query_options_are_sent() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/members/ana/boards"))
        .and(query_param("filter", "starred"))
        .and(query_param("lists", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&h.server)
        .await;

    let query = BoardsQuery {
        filter: Some("starred".into()),
        lists: Some("open".into()),
        ..BoardsQuery::for_member("ana")
    };
    h.client.get_boards(&query).await.unwrap();

    let requests = h.server.received_requests().await.unwrap();
    let sent = QueryParams::parse(requests[0].url.query().unwrap_or_default());
    assert!(!sent.contains_key("fields"));
    assert!(!sent.contains_key("organization"));
}

// ---- Cards ----

#[tokio::test]
async fn cards_board_wins_over_list() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/b1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":"c1"}]"#))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1/lists/l1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&h.server)
        .await;

    let filter = CardsFilter {
        board: Some("b1".into()),
        list: Some("l1".into()),
        member: None,
    };
    let cards = h.client.get_cards(&filter).await.unwrap();
    assert_eq!(cards[0].id, "c1");
}

#[tokio::test]
async fn cards_without_selector_makes_no_request() {
    let h = harness().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.get_cards(&CardsFilter::default()).await.unwrap_err();
    assert!(matches!(err, TrelloError::InvalidArgument(_)));
    assert!(send_log(&h).is_empty());
}

#[tokio::test]
async fn create_card_posts_json() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/1/cards"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "idList": "l1",
            "name": "Ship it",
            "pos": "top"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":"c9","name":"Ship it","idList":"l1"}"#,
        ))
        .expect(1)
        .mount(&h.server)
        .await;

    let card = h.client.create_card(&NewCard::new("l1", "Ship it")).await.unwrap();
    assert_eq!(card.id, "c9");
    assert_eq!(card.id_list.as_deref(), Some("l1"));
}

#[tokio::test]
async fn update_card_puts_only_set_fields() {
    let h = harness().await;
    Mock::given(method("PUT"))
        .and(path("/1/cards/c9"))
        .and(body_json(serde_json::json!({"closed": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id":"c9","closed":true}"#),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let update = CardUpdate {
        closed: Some(true),
        ..CardUpdate::default()
    };
    let card = h.client.update_card("c9", &update).await.unwrap();
    assert!(card.closed);
}

#[tokio::test]
async fn create_card_rejection_returns_raw_body() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/1/cards"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid value for idList"))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = h.client.create_card(&NewCard::new("nope", "Ship it")).await.unwrap_err();
    assert!(
        matches!(err, TrelloError::Api { status: 400, ref message } if message == "invalid value for idList")
    );
}

#[tokio::test]
async fn update_card_rejection_returns_raw_body() {
    let h = harness().await;
    Mock::given(method("PUT"))
        .and(path("/1/cards/c9"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"message":"boom"}"#))
        .expect(1)
        .mount(&h.server)
        .await;

    let update = CardUpdate {
        name: Some("Renamed".into()),
        ..CardUpdate::default()
    };
    let err = h.client.update_card("c9", &update).await.unwrap_err();
    assert!(
        matches!(err, TrelloError::Api { status: 500, ref message } if message == r#"{"message":"boom"}"#)
    );
}

#[tokio::test]
async fn ids_stay_inside_their_path_segment() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/cards/abc%23frag"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc#frag"}"#))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1/cards/abc%3Ffields%3Dname"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"x"}"#))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1/cards/abc%2Factions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"y"}"#))
        .expect(1)
        .mount(&h.server)
        .await;

    let card = h.client.get_card("abc#frag").await.unwrap();
    assert_eq!(card.id, "abc#frag");
    h.client.get_card("abc?fields=name").await.unwrap();
    h.client.get_card("abc/actions").await.unwrap();

    let requests = h.server.received_requests().await.unwrap();
    for request in &requests {
        assert_eq!(request.url.query(), Some("key=K&token=T"));
    }
}

#[tokio::test]
async fn dot_segment_id_is_rejected_before_sending() {
    let h = harness().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.get_card("..").await.unwrap_err();
    assert!(matches!(err, TrelloError::InvalidArgument(_)));
}

// ---- Webhooks ----

#[tokio::test]
async fn list_webhooks_unwraps_single_token() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/members/me/tokens"))
        .and(query_param("webhooks", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"id":"t1","webhooks":[{"id":"w1"}]}]"#),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let hooks = h.client.list_webhooks().await.unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].id, "w1");
    assert_eq!(
        serde_json::to_value(&hooks).unwrap(),
        serde_json::json!([{"id": "w1"}])
    );

    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("webhooks=true&key=K&token=T"));
}

#[tokio::test]
async fn list_webhooks_without_token_record_fails() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/members/me/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&h.server)
        .await;

    let err = h.client.list_webhooks().await.unwrap_err();
    assert!(matches!(err, TrelloError::UnexpectedResponseShape(_)));
}

#[tokio::test]
async fn get_webhook_by_id() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/1/webhooks/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":"w1","idModel":"b1","callbackURL":"https://example.com/t","active":true}"#,
        ))
        .mount(&h.server)
        .await;

    let hook = h.client.get_webhook("w1").await.unwrap();
    assert_eq!(hook.id_model.as_deref(), Some("b1"));
    assert_eq!(hook.active, Some(true));
}

#[tokio::test]
async fn create_webhook_uses_client_token() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/1/tokens/T/webhooks"))
        .and(body_json(serde_json::json!({
            "description": "feed",
            "callbackURL": "https://example.com/t",
            "idModel": "b1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"w2"}"#))
        .expect(1)
        .mount(&h.server)
        .await;

    let hook = h
        .client
        .create_webhook(&NewWebhook {
            description: "feed".into(),
            callback_url: "https://example.com/t".into(),
            model_id: "b1".into(),
        })
        .await
        .unwrap();
    assert_eq!(hook.id, "w2");
}

#[tokio::test]
async fn delete_webhook_sends_delete() {
    let h = harness().await;
    Mock::given(method("DELETE"))
        .and(path("/1/webhooks/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"_value":null}"#))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client.delete_webhook("w1").await.unwrap();
}

#[tokio::test]
async fn delete_webhook_not_found() {
    let h = harness().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("The requested resource was not found."))
        .mount(&h.server)
        .await;

    let err = h.client.delete_webhook("nope").await.unwrap_err();
    assert!(
        matches!(err, TrelloError::Api { status: 404, ref message } if message == "The requested resource was not found.")
    );
}

// ---- Webhook decoding through the client ----

#[tokio::test]
async fn client_decodes_webhook_into_its_log_dir() {
    let h = harness().await;
    let event = h
        .client
        .decode_webhook_payload(r#"{"action":{"type":"addMemberToCard"}}"#)
        .unwrap();
    assert_eq!(event.action_type(), Some("addMemberToCard"));

    let path = h.log_dir.path().join("webhook.log");
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents.matches(" Webhook\n").count(), 1);
}
