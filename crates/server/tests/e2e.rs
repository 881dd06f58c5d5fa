use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&AppConfig::default());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_menu_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let menu = format!("{}/api/menu", app.base_url);

    let res = c.get(&menu).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Vec<serde_json::Value>>().await?.len(), 6);

    // Create
    let res = c.post(&menu)
        .json(&json!({
            "name": "Nachos",
            "description": "Loaded tortilla chips",
            "price": 6.5,
            "category": "appetizer",
            "ingredients": ["chips", "cheese"]
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["id"], 7);
    assert_eq!(created["available"], true);

    // Replace
    let res = c.put(format!("{menu}/7"))
        .json(&json!({
            "name": "Super Nachos",
            "description": "Loaded tortilla chips with extra cheese",
            "price": 8.0,
            "category": "appetizer",
            "ingredients": ["chips", "cheese", "jalapeno"],
            "available": false
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "Super Nachos");

    // Delete
    let res = c.delete(format!("{menu}/7")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{menu}/7")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_validation_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/api/menu", app.base_url))
        .json(&json!({ "name": "ab", "price": -2 }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    let errors = body["errors"].as_array().cloned().unwrap_or_default();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[2]["rule"], "not_positive");
    Ok(())
}
