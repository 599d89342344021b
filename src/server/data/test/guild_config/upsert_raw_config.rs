use super::*;
use serde_json::json;

/// Tests the first write for a guild.
///
/// Verifies that a row is created implicitly, with no prior creation step.
///
/// Expected: Ok with row created
#[tokio::test]
async fn creates_row_on_first_write() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.upsert_raw_config(
        &guild_id("123456789"),
        RawConfigPayload::Structured(json!({ "features": { "a": true } })),
    )
    .await?;

    let stored = entity::prelude::GuildConfig::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.settings, Some(r#"{"features":{"a":true}}"#.to_string()));

    Ok(())
}

/// Tests overwriting an existing payload.
///
/// Verifies that a second write replaces the stored payload entirely, keeps a single row
/// per guild, and leaves `created_at` untouched.
///
/// Expected: Ok with payload replaced
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_guild_config_with_settings(
        db,
        "123456789",
        json!({ "features": { "old": true }, "legacy": 1 }),
    )
    .await?;

    let repo = GuildConfigRepository::new(db);
    repo.upsert_raw_config(
        &guild_id("123456789"),
        RawConfigPayload::Structured(json!({ "features": { "new": true } })),
    )
    .await?;

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = entity::prelude::GuildConfig::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.settings, Some(r#"{"features":{"new":true}}"#.to_string()));
    assert_eq!(stored.created_at, original.created_at);
    assert!(stored.updated_at >= original.updated_at);

    Ok(())
}

/// Tests that serialized payloads are written verbatim.
///
/// Expected: Ok with the exact text stored
#[tokio::test]
async fn writes_serialized_payload_verbatim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.upsert_raw_config(
        &guild_id("123456789"),
        RawConfigPayload::Serialized("{\"features\": {}}".to_string()),
    )
    .await?;

    let fetched = repo.fetch_raw_config(&guild_id("123456789")).await?;
    assert_eq!(
        fetched,
        Some(RawConfigPayload::Serialized("{\"features\": {}}".to_string()))
    );

    Ok(())
}

/// Tests that writes for one guild leave other guilds untouched.
///
/// Expected: Ok with both rows present
#[tokio::test]
async fn keeps_other_guilds_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config_with_settings(db, "111", json!({ "features": { "n": 1 } }))
        .await?;

    let repo = GuildConfigRepository::new(db);
    repo.upsert_raw_config(
        &guild_id("222"),
        RawConfigPayload::Structured(json!({ "features": { "n": 2 } })),
    )
    .await?;

    let first = repo.fetch_raw_config(&guild_id("111")).await?;
    assert_eq!(
        first,
        Some(RawConfigPayload::Serialized(r#"{"features":{"n":1}}"#.to_string()))
    );

    Ok(())
}

/// Tests that a storage failure is reported.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_storage_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo
        .upsert_raw_config(
            &guild_id("123456789"),
            RawConfigPayload::Structured(json!({})),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
