use super::*;

/// Tests read-your-writes through the store interface.
///
/// Expected: load observes the most recent store for the author
#[tokio::test]
async fn load_observes_latest_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());
    let author_id = UserId::new(123456789);

    repo.store(author_id, MessageId::new(1111)).await?;
    assert_eq!(repo.load(author_id).await?, Some(MessageId::new(1111)));

    repo.store(author_id, MessageId::new(2222)).await?;
    assert_eq!(repo.load(author_id).await?, Some(MessageId::new(2222)));

    Ok(())
}

/// Tests that storing for one author leaves other authors untouched.
///
/// Expected: each author keeps their own message
#[tokio::test]
async fn keeps_authors_independent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LastSentAuthorRepository::new(db.clone());

    repo.store(UserId::new(1), MessageId::new(10)).await?;
    repo.store(UserId::new(2), MessageId::new(20)).await?;
    repo.store(UserId::new(1), MessageId::new(11)).await?;

    assert_eq!(repo.load(UserId::new(1)).await?, Some(MessageId::new(11)));
    assert_eq!(repo.load(UserId::new(2)).await?, Some(MessageId::new(20)));

    let count = entity::prelude::LastSentAuthor::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
