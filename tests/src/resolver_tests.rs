use crate::utils::{retirement_tx, spawn_explorer, ExplorerFixture, CONTRACT};
use anyhow::Result;
use retirement_server::{Error, ExplorerConfig, TransactionResolver};
use serde_json::json;
use std::time::Duration;

fn resolver(base: &str) -> TransactionResolver {
    TransactionResolver::new(
        ExplorerConfig {
            api_base_url: base.to_string(),
            contract_address: CONTRACT.to_string(),
        },
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_resolves_first_transfer_hash() -> Result<()> {
    let mut fixture = ExplorerFixture::default();
    fixture.transfers.insert(
        "7".into(),
        vec![
            json!({"transaction_hash": "0xfirst"}),
            json!({"transaction_hash": "0xsecond"}),
        ],
    );
    let base = spawn_explorer(fixture).await?;

    let hash = resolver(&base).resolve_transaction_hash("7").await?;
    assert_eq!(hash.as_deref(), Some("0xfirst"));
    Ok(())
}

#[tokio::test]
async fn test_skips_records_without_hash() -> Result<()> {
    let mut fixture = ExplorerFixture::default();
    fixture.transfers.insert(
        "7".into(),
        vec![json!({"transaction_hash": null}), json!({"transaction_hash": "0xsecond"})],
    );
    let base = spawn_explorer(fixture).await?;

    let hash = resolver(&base).resolve_transaction_hash("7").await?;
    assert_eq!(hash.as_deref(), Some("0xsecond"));
    Ok(())
}

#[tokio::test]
async fn test_no_transfer_history_is_none() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let hash = resolver(&base).resolve_transaction_hash("404").await?;
    assert!(hash.is_none());
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_distinct_from_not_found() -> Result<()> {
    let mut fixture = ExplorerFixture::default();
    fixture.failing.insert("7".into());
    let base = spawn_explorer(fixture).await?;

    let err = resolver(&base).resolve_transaction_hash("7").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err}");
    Ok(())
}

#[tokio::test]
async fn test_fetch_transaction_detail() -> Result<()> {
    let fixture = ExplorerFixture::default().with_certificate("1", "0xabc", retirement_tx("0xabc", "0xretirer"));
    let base = spawn_explorer(fixture).await?;

    let tx = resolver(&base).fetch_transaction_detail("0xabc").await?;
    assert_eq!(tx.hash.as_deref(), Some("0xabc"));
    assert_eq!(tx.sender(), Some("0xretirer"));
    assert_eq!(tx.transfers().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_unknown_transaction_is_not_found() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    let err = resolver(&base).fetch_transaction_detail("0xmissing").await.unwrap_err();
    assert!(err.is_not_found(), "{err}");
    Ok(())
}

#[tokio::test]
async fn test_list_certificate_ids_in_explorer_order() -> Result<()> {
    let fixture = ExplorerFixture::default()
        .with_certificate("3", "0x3", retirement_tx("0x3", "0xa"))
        .with_certificate("1", "0x1", retirement_tx("0x1", "0xb"));
    let base = spawn_explorer(fixture).await?;

    let ids = resolver(&base).list_certificate_ids().await?;
    assert_eq!(ids, vec!["3".to_string(), "1".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_fetch_instance_metadata() -> Result<()> {
    let fixture = ExplorerFixture::default().with_certificate("5", "0x5", retirement_tx("0x5", "0xa"));
    let base = spawn_explorer(fixture).await?;

    let instance = resolver(&base).fetch_instance("5").await?;
    assert_eq!(instance.id.as_deref(), Some("5"));
    assert_eq!(
        instance.metadata.and_then(|m| m.name).as_deref(),
        Some("Project 5")
    );
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let base = spawn_explorer(ExplorerFixture::default()).await?;
    assert_eq!(resolver(&base).health_check().await?, "ok");

    let down = ExplorerFixture {
        listing_down: true,
        ..Default::default()
    };
    let base = spawn_explorer(down).await?;
    assert!(resolver(&base).health_check().await.is_err());
    Ok(())
}
