use super::*;
use serde_json::json;

/// Tests fetching the payload of a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.fetch_raw_config(&guild_id("123456789")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests fetching a stored payload.
///
/// Verifies that the stored text is handed back verbatim, without being parsed.
///
/// Expected: Ok(Some(Serialized))
#[tokio::test]
async fn returns_stored_text_verbatim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .settings(Some("{ not json".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.fetch_raw_config(&guild_id("123456789")).await?;

    assert_eq!(
        result,
        Some(RawConfigPayload::Serialized("{ not json".to_string()))
    );

    Ok(())
}

/// Tests fetching a row whose payload column is NULL.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_null_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .settings(None)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.fetch_raw_config(&guild_id("123456789")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that payloads are isolated per guild.
///
/// Expected: Ok(Some) with the requested guild's payload only
#[tokio::test]
async fn fetches_correct_guild_among_multiple() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config_with_settings(db, "111", json!({ "features": { "n": 1 } }))
        .await?;
    factory::create_guild_config_with_settings(db, "222", json!({ "features": { "n": 2 } }))
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.fetch_raw_config(&guild_id("222")).await?.unwrap();

    let document = result.normalize().unwrap().unwrap();
    assert_eq!(
        serde_json::Value::from(document),
        json!({ "features": { "n": 2 } })
    );

    Ok(())
}

/// Tests that a storage failure is reported rather than treated as "not configured".
///
/// The table is never created, so the query fails.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_storage_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.fetch_raw_config(&guild_id("123456789")).await;

    assert!(result.is_err());

    Ok(())
}
