//! Integration tests for the SMS webhook + recommendation endpoints.
//!
//! Each test spins up an Axum server on a random port and exercises the
//! real HTTP contract with reqwest.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use sms_assist::catalog::explain::RuleBasedExplainer;
use sms_assist::catalog::{AgeBounds, Catalog, Opportunity};
use sms_assist::channels::LogSender;
use sms_assist::channels::webhook::{AppState, routes};
use sms_assist::dialog::DialogManager;
use sms_assist::store::{MemorySessionStore, SessionStore};

fn opportunity(id: &str, deadline: &str, min_age: u32, max_age: u32) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: format!("Opportunity {id}"),
        category: "scholarship".to_string(),
        education_level: "graduate".to_string(),
        eligibility: AgeBounds { min_age, max_age },
        deadline: deadline.to_string(),
        link: format!("https://example.org/{id}"),
    }
}

/// Start a server on a random port, return its base URL.
async fn start_server(catalog: Catalog) -> String {
    let store = Arc::new(MemorySessionStore::new());
    let state = AppState {
        dialog: Arc::new(DialogManager::new(store as Arc<dyn SessionStore>)),
        catalog: Arc::new(catalog),
        explainer: Arc::new(RuleBasedExplainer),
        sender: Arc::new(LogSender),
    };
    let app = routes(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn form_webhook_replies_with_xml_envelope() {
    let base = start_server(Catalog::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sms/webhook"))
        .form(&[("Body", "I need a scholarship"), ("From", "9000000001")])
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "application/xml"
    );
    let xml = response.text().await.unwrap();
    assert!(xml.contains("<Message>Which class or degree are you studying in?</Message>"));
}

#[tokio::test]
async fn json_webhook_runs_a_full_dialog() {
    let base = start_server(Catalog::default()).await;
    let client = reqwest::Client::new();

    let turn = |message: &str| {
        let client = client.clone();
        let url = format!("{base}/sms/webhook");
        let body = serde_json::json!({ "message": message, "phone": "9000000002" });
        async move {
            let response = client.post(url).json(&body).send().await.unwrap();
            assert!(response.status().is_success());
            let value: serde_json::Value = response.json().await.unwrap();
            assert_eq!(value["status"], "success");
            value["reply"].as_str().unwrap().to_string()
        }
    };

    assert_eq!(
        turn("I need a scholarship").await,
        "Which class or degree are you studying in?"
    );
    assert_eq!(
        turn("BA").await,
        "Your category? (General / OBC / SC / ST)"
    );
    assert_eq!(turn("OBC").await, "Your gender?");
    assert_eq!(turn("male").await, "Which state are you from?");

    let final_reply = turn("Odisha").await;
    assert!(final_reply.contains("scholarship"));
    assert!(final_reply.contains("https://scholarships.gov.in"));
    assert!(final_reply.chars().count() <= 160);
}

#[tokio::test]
async fn unknown_message_gets_immediate_fallback() {
    let base = start_server(Catalog::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sms/webhook"))
        .json(&serde_json::json!({ "message": "xyz garbage", "phone": "9000000003" }))
        .send()
        .await
        .unwrap();

    let value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        value["reply"],
        "Sorry, I couldn't understand. Try jobs, internship or schemes."
    );
}

#[tokio::test]
async fn reset_starts_the_dialog_over() {
    let base = start_server(Catalog::default()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/sms/webhook"))
        .json(&serde_json::json!({ "message": "internship", "phone": "9000000004" }))
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("{base}/sms/reset"))
        .json(&serde_json::json!({ "phone": "9000000004" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    // The next message is an initiating turn again, not an answer
    let response = client
        .post(format!("{base}/sms/webhook"))
        .json(&serde_json::json!({ "message": "job please", "phone": "9000000004" }))
        .send()
        .await
        .unwrap();
    let value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(value["reply"], "What is your age?");
}

#[tokio::test]
async fn recommend_filters_ranks_and_explains() {
    let catalog = Catalog::new(vec![
        opportunity("late", "2026-12-01", 18, 25),
        opportunity("too-strict", "2026-08-01", 18, 24),
        opportunity("soon", "2026-08-20", 18, 25),
    ]);
    let base = start_server(catalog).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recommend"))
        .json(&serde_json::json!({ "age": 25, "education_level": "graduate" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let recs: Vec<serde_json::Value> = response.json().await.unwrap();

    // max_age 24 excludes the 25-year-old; survivors ordered by deadline
    let ids: Vec<&str> = recs.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["soon", "late"]);

    for rec in &recs {
        assert!(rec["title"].is_string());
        assert!(rec["deadline"].is_string());
        assert!(rec["link"].is_string());
        assert!(!rec["explanation"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn recommend_rejects_unparsable_deadlines() {
    let catalog = Catalog::new(vec![opportunity("bad", "01/12/2026", 18, 25)]);
    let base = start_server(catalog).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recommend"))
        .json(&serde_json::json!({ "age": 22, "education_level": "graduate" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn healthz_reports_catalog_size() {
    let catalog = Catalog::new(vec![opportunity("a", "2026-08-20", 18, 25)]);
    let base = start_server(catalog).await;

    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert!(response.status().is_success());
    let value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["catalog_size"], 1);
}
