use super::*;

/// Tests that a save is visible through the next read.
///
/// Verifies write-then-read consistency: the saved features are merged over the defaults
/// by the same rule as any stored document.
///
/// Expected: Ok with saved values and default siblings
#[tokio::test]
async fn saved_features_are_read_back_merged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);
    let partial = json!({
        "security": { "verification": { "enabled": true, "role": "555" } },
        "logging": { "moderation_channel": "777" }
    });
    service
        .save_feature_config("g1", ConfigNode::from(partial))
        .await?;

    let config = service.get_effective_config("g1").await?;

    assert_eq!(config.source, ConfigSource::Stored);
    assert_eq!(
        bool_at(&config.document, &["features", "security", "verification", "enabled"]),
        Some(true)
    );
    assert_eq!(
        config
            .document
            .get_path(&["features", "security", "verification", "method"])
            .and_then(ConfigNode::as_str),
        Some("button")
    );
    assert_eq!(
        config
            .document
            .get_path(&["features", "logging", "moderation_channel"])
            .and_then(ConfigNode::as_str),
        Some("777")
    );
    assert_eq!(
        bool_at(&config.document, &["features", "moderation", "purge", "enabled"]),
        Some(true)
    );

    Ok(())
}

/// Tests that saving replaces the features section instead of merging into it.
///
/// Expected: Ok with the previously stored feature keys gone
#[tokio::test]
async fn replaces_features_section_wholesale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config_with_settings(
        db,
        "g1",
        json!({ "features": { "moderation": { "purge": { "enabled": false } } } }),
    )
    .await?;

    GuildConfigService::new(db)
        .save_feature_config("g1", ConfigNode::from(json!({ "tickets": { "enabled": true } })))
        .await?;

    let row = entity::prelude::GuildConfig::find_by_id("g1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored_document(&row),
        json!({ "features": { "tickets": { "enabled": true } } })
    );

    Ok(())
}

/// Tests that keys outside the features section are kept on save.
///
/// Expected: Ok with the other top-level keys unchanged
#[tokio::test]
async fn keeps_other_top_level_keys() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config_with_settings(
        db,
        "g1",
        json!({ "prefix": "?", "features": {} }),
    )
    .await?;

    GuildConfigService::new(db)
        .save_feature_config("g1", ConfigNode::from(json!({ "giveaways": { "max_winners": 3 } })))
        .await?;

    let row = entity::prelude::GuildConfig::find_by_id("g1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored_document(&row),
        json!({ "prefix": "?", "features": { "giveaways": { "max_winners": 3 } } })
    );

    Ok(())
}

/// Tests saving over a corrupted stored payload.
///
/// Verifies that the corrupted payload is discarded and replaced by a document holding
/// only the new features section, not the defaults.
///
/// Expected: Ok with `{ "features": <saved> }` persisted
#[tokio::test]
async fn starts_from_empty_document_when_stored_payload_is_malformed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("g1")
        .settings(Some("{{{".to_string()))
        .build()
        .await?;

    GuildConfigService::new(db)
        .save_feature_config("g1", ConfigNode::from(json!({ "welcomer": { "enabled": true } })))
        .await?;

    let row = entity::prelude::GuildConfig::find_by_id("g1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored_document(&row),
        json!({ "features": { "welcomer": { "enabled": true } } })
    );

    Ok(())
}

/// Tests that deeper shape problems are persisted as given and recovered on read.
///
/// A mistyped value inside an otherwise valid object is not validated on write; the read
/// still returns a complete document and the typed view reports the mismatch.
///
/// Expected: Ok on save, Ok on read with the mistyped value in place
#[tokio::test]
async fn persists_mistyped_values_as_given() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);
    service
        .save_feature_config(
            "g1",
            ConfigNode::from(json!({ "moderation": { "purge": { "max_messages": "lots" } } })),
        )
        .await?;

    let config = service.get_effective_config("g1").await?;

    assert_eq!(
        config
            .document
            .get_path(&["features", "moderation", "purge", "max_messages"])
            .and_then(ConfigNode::as_str),
        Some("lots")
    );
    assert!(config.settings().is_err());

    Ok(())
}

/// Tests that a non-object features body is rejected before anything is written.
///
/// Expected: Err(GuildConfigError::InvalidFeatureConfig) and no row created
#[tokio::test]
async fn rejects_non_object_features() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigService::new(db)
        .save_feature_config("g1", ConfigNode::from(json!([1, 2])))
        .await;

    assert!(matches!(
        result,
        Err(GuildConfigError::InvalidFeatureConfig("an array"))
    ));

    let row = entity::prelude::GuildConfig::find_by_id("g1".to_string())
        .one(db)
        .await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests saving with an empty guild ID.
///
/// Expected: Err(GuildConfigError::InvalidGuildId) without touching storage
#[tokio::test]
async fn rejects_empty_guild_id_without_storage_access() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigService::new(db)
        .save_feature_config("", ConfigNode::empty_object())
        .await;

    assert!(matches!(result, Err(GuildConfigError::InvalidGuildId)));

    Ok(())
}

/// Tests that storage failures are reported on save.
///
/// Expected: Err(GuildConfigError::Persistence)
#[tokio::test]
async fn reports_storage_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigService::new(db)
        .save_feature_config("g1", ConfigNode::empty_object())
        .await;

    assert!(matches!(result, Err(GuildConfigError::Persistence(_))));

    Ok(())
}

/// Tests that consecutive saves resolve as last write wins.
///
/// Expected: Ok with only the second save's features stored
#[tokio::test]
async fn last_save_wins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildConfigService::new(db);
    service
        .save_feature_config("g1", ConfigNode::from(json!({ "tickets": { "enabled": true } })))
        .await?;
    service
        .save_feature_config("g1", ConfigNode::from(json!({ "tickets": { "enabled": false } })))
        .await?;

    let config = service.get_effective_config("g1").await?;
    assert_eq!(
        bool_at(&config.document, &["features", "tickets", "enabled"]),
        Some(false)
    );

    Ok(())
}
