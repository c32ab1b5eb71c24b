mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

async fn error_body(res: reqwest::Response) -> Result<serde_json::Value> {
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");
    Ok(body)
}

#[tokio::test]
async fn invalid_id_rejected_on_every_id_taking_endpoint() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();
    let bearer = format!("Bearer {}", token);

    let url = format!("{}/users/clearlynotauuid", server.base_url);
    let requests = vec![
        client.get(&url).header("authorization", &bearer),
        client
            .put(&url)
            .header("authorization", &bearer)
            .json(&json!({ "name": "Yamada Tae" })),
        client.delete(&url).header("authorization", &bearer),
    ];

    for request in requests {
        let body = error_body(request.send().await?).await?;
        assert_eq!(body["message"], "params/id should be a valid UUID");
    }

    Ok(())
}

#[tokio::test]
async fn create_with_no_body_must_be_object() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body must be object");

    Ok(())
}

#[tokio::test]
async fn create_with_array_body_must_be_object() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!(["not", "an", "object"]))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body must be object");

    Ok(())
}

#[tokio::test]
async fn create_reports_each_missing_required_field() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let full = json!({
        "name": "Sugita Hina",
        "email": "hsugita@jfa.jp",
        "password": "nadeshiko6",
    });

    for field in ["name", "email", "password"] {
        let mut payload = full.clone();
        payload.as_object_mut().unwrap().remove(field);

        let res = client
            .post(format!("{}/users", server.base_url))
            .header("authorization", format!("Bearer {}", token))
            .json(&payload)
            .send()
            .await?;
        let body = error_body(res).await?;
        assert_eq!(
            body["message"],
            format!("body must have required property '{}'", field)
        );
    }

    Ok(())
}

#[tokio::test]
async fn create_with_empty_object_surfaces_first_declared_violation() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    // name, email and password are all missing; the headline message is the
    // first declared field, deterministically
    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({}))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body must have required property 'name'");

    Ok(())
}

#[tokio::test]
async fn create_with_invalid_email() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Miyazawa Hinata",
            "email": "notanemail",
            "password": "nadeshiko7",
        }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body/email should be a valid email address");

    Ok(())
}

#[tokio::test]
async fn create_with_short_password() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Naomoto Hikaru",
            "email": "hnaomoto@jfa.jp",
            "password": "nao",
        }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(
        body["message"],
        "body/password should be a at least 8 characters long"
    );

    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_fields() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/users", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Endo Jun",
            "email": "jendo@jfa.jp",
            "password": "nadeshiko8",
            "role": "admin",
        }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body must NOT have additional properties");

    Ok(())
}

#[tokio::test]
async fn update_with_no_body_must_be_object() -> Result<()> {
    let server = common::spawn_server().await?;
    let user = server
        .seed_user("Kumagai Saki", "skumagai@jfa.jp", "nadeshiko4")
        .await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/users/{}", server.base_url, user.id))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body must be object");

    Ok(())
}

#[tokio::test]
async fn update_enforces_field_rules_when_fields_are_present() -> Result<()> {
    let server = common::spawn_server().await?;
    let user = server
        .seed_user("Kumagai Saki", "skumagai@jfa.jp", "nadeshiko4")
        .await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/users/{}", server.base_url, user.id);

    let res = client
        .put(&url)
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "password": "nao" }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(
        body["message"],
        "body/password should be a at least 8 characters long"
    );

    let res = client
        .put(&url)
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "email": "notanemail" }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "body/email should be a valid email address");

    Ok(())
}

#[tokio::test]
async fn invalid_id_reported_before_body_problems() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    // Both the id and the body are invalid; the params violation wins
    let res = client
        .put(format!("{}/users/clearlynotauuid", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "password": "nao" }))
        .send()
        .await?;
    let body = error_body(res).await?;
    assert_eq!(body["message"], "params/id should be a valid UUID");

    Ok(())
}
