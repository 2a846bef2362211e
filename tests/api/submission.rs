use crate::helpers::{spawn_app, spawn_app_with, ADMIN_EMAIL, MAIL_DOMAIN};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use form_relay::configuration::MailSettings;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "<20261018.1@mg.example.com>",
        "message": "Queued. Thank you."
    }))
}

#[tokio::test]
async fn get_returns_405_and_sends_no_mail() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = reqwest::get(&format!("{}/submit", &app.address))
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(response.text().await.unwrap(), "Method Not Allowed");
}

#[tokio::test]
async fn a_contact_submission_returns_200_and_sends_two_emails() {
    let app = spawn_app().await;
    Mock::given(path(format!("/v3/{}/messages", MAIL_DOMAIN)))
        .and(method("POST"))
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({
            "type": "contact",
            "data": { "name": "Ana", "email": "a@x.com", "message": "Hi" }
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "contact submission received successfully!" })
    );
    assert_eq!(app.sent_field("to").await, vec![ADMIN_EMAIL, "a@x.com"]);
}

#[tokio::test]
async fn every_submission_type_renders_its_own_subjects() {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let test_cases = vec![
        (
            "contact",
            format!("New Contact Form Submission from {}", name),
            "Thanks for contacting us!",
        ),
        (
            "fantasy-league",
            format!("New Fantasy League Signup: {}", name),
            "Welcome to the Fantasy League!",
        ),
        (
            "listing-request",
            "New Car Listing Request: 1999 Mazda Miata".to_string(),
            "We received your listing request",
        ),
        (
            "event-registration",
            format!("New Event Registration: {}", name),
            "Your event registration is confirmed",
        ),
        (
            "bake-sale",
            format!("New Event Registration: {}", name),
            "Your event registration is confirmed",
        ),
    ];

    for (submission_type, admin_subject, user_subject) in test_cases {
        let app = spawn_app().await;
        Mock::given(any())
            .respond_with(accepted())
            .expect(2)
            .mount(&app.email_server)
            .await;

        let response = app
            .post_submission(&serde_json::json!({
                "type": submission_type,
                "data": {
                    "name": name,
                    "email": email,
                    "year": 1999,
                    "make": "Mazda",
                    "model": "Miata"
                }
            }))
            .await;

        assert_eq!(
            response.status().as_u16(),
            200,
            "The API did not accept a {} submission.",
            submission_type
        );
        assert_eq!(
            app.sent_field("subject").await,
            vec![admin_subject, user_subject.to_string()],
            "Unexpected subjects for a {} submission.",
            submission_type
        );
    }
}

#[tokio::test]
async fn a_submission_without_a_type_is_an_event_registration() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({
            "data": { "name": "Ana", "email": "a@x.com", "eventName": "Spring Gala" }
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        app.sent_field("subject").await[0],
        "New Event Registration: Ana"
    );
}

#[tokio::test]
async fn listing_request_photos_are_rendered_in_order() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;

    app.post_submission(&serde_json::json!({
        "type": "listing-request",
        "data": {
            "name": "Ana",
            "email": "a@x.com",
            "images": ["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"]
        }
    }))
    .await;

    let admin_html = &app.sent_field("html").await[0];
    assert_eq!(admin_html.matches("<img").count(), 2);
    let first = admin_html.find("https://cdn.example.com/a.png").unwrap();
    let second = admin_html.find("https://cdn.example.com/b.png").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn missing_api_key_and_recipient_returns_500_and_sends_no_mail() {
    let app = spawn_app_with(|settings| MailSettings {
        api_key: None,
        recipient: None,
        ..settings
    })
    .await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({ "type": "contact", "data": { "name": "Ana" } }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Server configuration error");
    assert_eq!(body["details"], "Missing Mailgun API Key or Email To address");
}

#[tokio::test]
async fn missing_domain_returns_500_without_details() {
    let app = spawn_app_with(|settings| MailSettings {
        domain: None,
        ..settings
    })
    .await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({ "type": "contact", "data": { "name": "Ana" } }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Server config error: Missing MAILGUN_DOMAIN" })
    );
}

#[tokio::test]
async fn malformed_json_returns_500() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_raw_submission("{\"type\": \"contact\",").await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to process submission");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn a_failed_admin_notification_returns_500_and_skips_the_submitter() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({
            "type": "contact",
            "data": { "name": "Ana", "email": "a@x.com" }
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to process submission");
    assert_eq!(app.sent_field("to").await, vec![ADMIN_EMAIL]);
}

#[tokio::test]
async fn a_failed_acknowledgment_still_returns_200() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({
            "type": "event-registration",
            "data": { "name": "Ana", "email": "a@x.com", "comments": "See you there" }
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "event-registration submission received successfully!" })
    );
}

#[tokio::test]
async fn the_success_message_echoes_a_missing_or_null_type_verbatim() {
    let test_cases = vec![
        (
            serde_json::json!({ "data": { "name": "Ana", "email": "a@x.com" } }),
            "undefined submission received successfully!",
        ),
        (
            serde_json::json!({ "type": null, "data": { "name": "Ana", "email": "a@x.com" } }),
            "null submission received successfully!",
        ),
    ];

    for (body, expected_message) in test_cases {
        let app = spawn_app().await;
        Mock::given(any())
            .respond_with(accepted())
            .expect(2)
            .mount(&app.email_server)
            .await;

        let response = app.post_submission(&body).await;

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], expected_message);
        assert_eq!(
            app.sent_field("subject").await[0],
            "New Event Registration: Ana"
        );
    }
}

#[tokio::test]
async fn a_non_string_type_is_an_event_registration() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({
            "type": 5,
            "data": { "name": "Ana", "email": "a@x.com" }
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "5 submission received successfully!" })
    );
    assert_eq!(
        app.sent_field("subject").await,
        vec![
            "New Event Registration: Ana",
            "Your event registration is confirmed"
        ]
    );
}

#[tokio::test]
async fn a_submission_without_data_returns_500_and_sends_no_mail() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_submission(&serde_json::json!({ "type": "contact" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to process submission");
    assert!(body["details"].as_str().unwrap().contains("data"));
}
