use super::*;

/// Tests that load only returns the requested author's message.
///
/// Expected: Ok(Some(message)) for each author, never the other one's
#[tokio::test]
async fn returns_message_for_requested_author_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = LastSentAuthorFactory::new(db).build().await?;
    let second = LastSentAuthorFactory::new(db).build().await?;

    let repo = LastSentAuthorRepository::new(db.clone());

    let first_author = UserId::new(first.author_id.parse().unwrap());
    let second_author = UserId::new(second.author_id.parse().unwrap());

    assert_eq!(
        repo.load(first_author).await?,
        Some(MessageId::new(first.message_id.parse().unwrap()))
    );
    assert_eq!(
        repo.load(second_author).await?,
        Some(MessageId::new(second.message_id.parse().unwrap()))
    );

    Ok(())
}

/// Tests loading for an author without a record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());

    assert_eq!(repo.load(UserId::new(42)).await?, None);

    Ok(())
}

/// Tests that engine failures are surfaced, not mapped to "not found".
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn surfaces_database_errors() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());
    let result = repo.load(UserId::new(42)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
