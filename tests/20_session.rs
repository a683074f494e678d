mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn login_token_is_accepted_everywhere() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let login = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "tsuki@example.com", "password": "password1" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let token = login["token"].as_str().expect("login returns a token").to_string();

    let refreshed = client
        .post(format!("{}/auth/refresh", server.base_url))
        .json(&json!({ "token": token }))
        .send()
        .await?;
    assert_eq!(refreshed.status(), StatusCode::OK);
    let refreshed = refreshed.json::<Value>().await?;
    assert_eq!(refreshed["success"], true);
    let token = refreshed["token"].as_str().expect("refresh returns a token").to_string();

    // profile lookup sends the token in a GET body
    let me = client
        .get(format!("{}/users/me", server.base_url))
        .json(&json!({ "token": token }))
        .send()
        .await?;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(
        me.json::<Value>().await?,
        json!({ "success": true, "user": { "id": 1, "name": "test", "email": "test@example.com" } })
    );

    let logout = client
        .post(format!("{}/auth/logout", server.base_url))
        .json(&json!({ "token": token }))
        .send()
        .await?;
    assert_eq!(logout.status(), StatusCode::OK);
    assert_eq!(logout.json::<Value>().await?, json!({ "success": true }));
    Ok(())
}

#[tokio::test]
async fn foreign_token_is_rejected_everywhere() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for (method, path) in [
        (reqwest::Method::POST, "/auth/logout"),
        (reqwest::Method::POST, "/auth/refresh"),
        (reqwest::Method::GET, "/users/me"),
    ] {
        let res = client
            .request(method.clone(), format!("{}{}", server.base_url, path))
            .json(&json!({ "token": "not-the-token" }))
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
        assert_eq!(res.json::<Value>().await?, json!({ "message": "トークンが無効です" }));
    }
    Ok(())
}
