use super::*;

/// Tests creating a new record.
///
/// Verifies that the repository inserts a row when the author has none yet.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author_id = UserId::new(123456789);
    let message_id = MessageId::new(987654321);

    let repo = LastSentAuthorRepository::new(db.clone());
    let record = repo
        .upsert(UpsertLastSentAuthorParam {
            author_id,
            message_id,
        })
        .await?;

    assert_eq!(record.author_id, author_id);
    assert_eq!(record.message_id, message_id);

    // Verify record was created in database
    let stored = entity::prelude::LastSentAuthor::find_by_id("123456789".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.message_id, "987654321");

    Ok(())
}

/// Tests overwriting an existing record.
///
/// Verifies that a second upsert for the same author replaces the message ID
/// instead of adding another row.
///
/// Expected: Ok with record updated, still one row
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author_id = UserId::new(123456789);

    let repo = LastSentAuthorRepository::new(db.clone());
    let original = repo
        .upsert(UpsertLastSentAuthorParam {
            author_id,
            message_id: MessageId::new(111111111),
        })
        .await?;

    let updated = repo
        .upsert(UpsertLastSentAuthorParam {
            author_id,
            message_id: MessageId::new(222222222),
        })
        .await?;

    assert_eq!(updated.message_id, MessageId::new(222222222));
    assert!(updated.updated_at >= original.updated_at);

    let count = entity::prelude::LastSentAuthor::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting without the table fails.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());
    let result = repo
        .upsert(UpsertLastSentAuthorParam {
            author_id: UserId::new(1),
            message_id: MessageId::new(2),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
