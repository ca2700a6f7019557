use onboard_adapters::validation::RegexEmailValidator;
use onboard_core::{AccountId, AccountStore};
use serde_json::json;

use crate::helpers::{AlwaysValid, FailingAddAccount, TestApp};

#[tokio::test]
async fn should_return_200_and_store_account_for_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "any_name",
            "email": "any_email@gmail.com",
            "password": "password",
            "passwordConfirmation": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "any_name");
    assert_eq!(body["email"], "any_email@gmail.com");
    assert_eq!(body["password"], "password");
    assert!(body.get("passwordConfirmation").is_none());

    let id = body["id"].as_str().expect("id is a string");
    let stored = app
        .account_store
        .as_ref()
        .unwrap()
        .get_account(&AccountId::new(id))
        .await
        .unwrap();
    assert_eq!(stored.email, "any_email@gmail.com");
}

#[tokio::test]
async fn should_return_400_naming_first_missing_field() {
    let app = TestApp::new().await;

    let test_cases = [
        (json!({}), "name"),
        (json!({ "password": "password" }), "name"),
        (
            json!({ "name": "any_name", "password": "password" }),
            "email",
        ),
        (
            json!({ "name": "any_name", "email": "", "password": "password" }),
            "email",
        ),
        (
            json!({ "name": "any_name", "email": "any_email@gmail.com" }),
            "password",
        ),
        (
            json!({
                "name": "any_name",
                "email": "any_email@gmail.com",
                "password": "password",
            }),
            "passwordConfirmation",
        ),
    ];

    for (body, missing) in test_cases {
        let response = app.post_signup(&body).await;

        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        let error: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            error,
            json!({ "error": format!("Missing parameter: {missing}") }),
            "Failed for input: {body}"
        );
    }

    assert!(app.account_store.as_ref().unwrap().is_empty().await);
}

#[tokio::test]
async fn should_return_400_for_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "any_name",
            "email": "any_email",
            "password": "password",
            "passwordConfirmation": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error, json!({ "error": "Invalid parameter: email" }));
}

#[tokio::test]
async fn should_return_400_when_confirmation_differs() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "any_name",
            "email": "any_email@gmail.com",
            "password": "password",
            "passwordConfirmation": "passwordConfirmation",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        error,
        json!({ "error": "Invalid parameter: passwordConfirmation" })
    );
    assert!(app.account_store.as_ref().unwrap().is_empty().await);
}

#[tokio::test]
async fn should_return_500_when_account_creation_fails() {
    let app = TestApp::with_collaborators(AlwaysValid, FailingAddAccount).await;

    let response = app
        .post_signup(&json!({
            "name": "any_name",
            "email": "any_email@gmail.com",
            "password": "password",
            "passwordConfirmation": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn should_reject_malformed_json_before_the_controller() {
    let app = TestApp::with_collaborators(RegexEmailValidator::new(), FailingAddAccount).await;

    let response = app.post_signup_raw("{ not json").await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Malformed request body")
    );
}

#[tokio::test]
async fn should_report_missing_field_when_fields_are_wrongly_typed() {
    let app = TestApp::new().await;

    let response = app.post_signup(&json!({ "name": 42 })).await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error, json!({ "error": "Missing parameter: email" }));
}

#[tokio::test]
async fn should_return_400_for_non_string_email() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "any_name",
            "email": ["any_email@gmail.com"],
            "password": "password",
            "passwordConfirmation": "password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error, json!({ "error": "Invalid parameter: email" }));
    assert!(app.account_store.as_ref().unwrap().is_empty().await);
}

#[tokio::test]
async fn should_return_400_for_a_scalar_body() {
    let app = TestApp::new().await;

    let response = app.post_signup_raw("42").await;

    assert_eq!(response.status().as_u16(), 400);
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Malformed request body")
    );
}
