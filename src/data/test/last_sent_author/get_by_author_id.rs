use super::*;

/// Tests retrieving a record seeded by the factory.
///
/// Expected: Ok(Some(record))
#[tokio::test]
async fn returns_record_for_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LastSentAuthorFactory::new(db)
        .author_id(123456789)
        .message_id(987654321)
        .build()
        .await?;

    let repo = LastSentAuthorRepository::new(db.clone());
    let record = repo.get_by_author_id(UserId::new(123456789)).await?;

    let record = record.unwrap();
    assert_eq!(record.author_id, UserId::new(123456789));
    assert_eq!(record.message_id, MessageId::new(987654321));

    Ok(())
}

/// Tests retrieving a record for an author that never announced.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());
    let record = repo.get_by_author_id(UserId::new(999999999)).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests that a corrupted message ID surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unparseable_message_id() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    entity::last_sent_author::ActiveModel {
        author_id: ActiveValue::Set("123456789".to_string()),
        message_id: ActiveValue::Set("not-a-snowflake".to_string()),
        updated_at: ActiveValue::Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    let repo = LastSentAuthorRepository::new(db.clone());
    let result = repo.get_by_author_id(UserId::new(123456789)).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
