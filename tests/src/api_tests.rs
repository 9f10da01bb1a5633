use crate::utils::{retirement_tx, spawn_explorer, temp_certificates_dir, test_state, ExplorerFixture};
use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use retirement_server::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> Result<(StatusCode, Value)> {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, body))
}

#[tokio::test]
async fn test_get_certificate_json_shape() -> Result<()> {
    let fixture = ExplorerFixture::default()
        .with_certificate("1", "0xretire", retirement_tx("0xretire", "0xretirer"));
    let base = spawn_explorer(fixture).await?;
    let app = create_router(test_state(&base, &temp_certificates_dir("api_cert"))?);

    let (status, body) = get(app, "/certificates/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!("1"));
    assert_eq!(body["retiredBy"], json!("0xretirer"));
    assert_eq!(body["beneficiary"]["walletAddress"], json!("0xbeneficiarywallet"));
    assert_eq!(body["onChainDetails"]["projectSpecificToken"], json!("CO2E-902-2018"));
    assert_eq!(body["projectDetails"]["carbonStandard"], json!("VCS"));
    assert_eq!(body["amount"], json!({"value": "5", "unit": "tonnes"}));
    Ok(())
}

#[tokio::test]
async fn test_unknown_certificate_is_404() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let app = create_router(test_state(&base, &temp_certificates_dir("api_404"))?);

    let (status, body) = get(app, "/certificates/77").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_explorer_failure_is_502() -> Result<()> {
    let mut fixture = ExplorerFixture::default();
    fixture.failing.insert("8".into());
    let base = spawn_explorer(fixture).await?;
    let app = create_router(test_state(&base, &temp_certificates_dir("api_502"))?);

    let (status, _) = get(app, "/certificates/8").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn test_certificate_index() -> Result<()> {
    let mut fixture = ExplorerFixture::default()
        .with_certificate("1", "0x1", retirement_tx("0x1", "0xalice"))
        .with_certificate("2", "0x2", retirement_tx("0x2", "0xbob"));
    fixture.failing.insert("1".into());
    let base = spawn_explorer(fixture).await?;
    let app = create_router(test_state(&base, &temp_certificates_dir("api_index"))?);

    let (status, body) = get(app, "/certificates").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": "1", "title": "Project 1", "amount": "1", "retiredBy": "-"},
            {"id": "2", "title": "Project 2", "amount": "1", "retiredBy": "0xbob"}
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_static_certificates() -> Result<()> {
    let dir = temp_certificates_dir("api_static");
    std::fs::write(
        dir.join("a1.json"),
        json!({"id": "a1", "title": "Static One", "amount": {"value": 2, "unit": "tonnes"}})
            .to_string(),
    )?;
    std::fs::write(
        dir.join("b2.json"),
        json!({"id": "b2", "title": "Static Two"}).to_string(),
    )?;
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let state = test_state(&base, &dir)?;

    let (status, body) = get(create_router(state.clone()), "/api/certificate").await?;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Static One", "Static Two"]);
    assert_eq!(body[0]["amount"]["value"], json!("2"));

    let (status, body) = get(create_router(state.clone()), "/api/certificate/ids").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": "a1"}, {"id": "b2"}]));

    let (status, body) = get(create_router(state.clone()), "/api/certificate/b2").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!("Static Two"));
    assert_eq!(body["quote"], json!(""));

    let (status, _) = get(create_router(state), "/api/certificate/zz").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}

#[tokio::test]
async fn test_request_id_propagated() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let app = create_router(test_state(&base, &temp_certificates_dir("api_reqid"))?);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/certificate/ids")
                .header("x-request-id", "trace-123")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.headers()["x-request-id"], "trace-123");

    let response = app
        .oneshot(Request::builder().uri("/api/certificate/ids").body(Body::empty())?)
        .await?;
    let generated = response.headers()["x-request-id"].to_str()?;
    assert!(generated.starts_with("cert-"));
    Ok(())
}

#[tokio::test]
async fn test_health_and_metrics() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let state = test_state(&base, &temp_certificates_dir("api_health"))?;

    let (status, body) = get(create_router(state.clone()), "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["explorer"], json!("ok"));

    let (status, body) = get(create_router(state), "/metrics").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("retirement_static_certificates 0"));
    Ok(())
}

#[tokio::test]
async fn test_health_degraded_without_explorer() -> Result<()> {
    let state = test_state(
        "http://127.0.0.1:1/api/v2",
        &temp_certificates_dir("api_degraded"),
    )?;
    let (status, body) = get(create_router(state), "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("degraded"));
    assert_eq!(body["explorer"], json!("unavailable"));
    Ok(())
}
