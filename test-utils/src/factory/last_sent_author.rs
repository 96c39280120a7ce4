//! Factory for seeding stored "last announcement" records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating last-sent-author rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::last_sent_author::LastSentAuthorFactory;
///
/// let record = LastSentAuthorFactory::new(&db)
///     .author_id(123456789)
///     .message_id(987654321)
///     .build()
///     .await?;
/// ```
pub struct LastSentAuthorFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: u64,
    message_id: u64,
}

impl<'a> LastSentAuthorFactory<'a> {
    /// Creates a new factory with unique author and message IDs.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LastSentAuthorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            author_id: next_id(),
            message_id: next_id(),
        }
    }

    /// Sets the Discord user ID of the author.
    pub fn author_id(mut self, author_id: u64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets the Discord message ID of the stored announcement.
    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    /// Builds and inserts the record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::last_sent_author::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::last_sent_author::Model, DbErr> {
        entity::last_sent_author::ActiveModel {
            author_id: ActiveValue::Set(self.author_id.to_string()),
            message_id: ActiveValue::Set(self.message_id.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a record with default values.
///
/// Shorthand for `LastSentAuthorFactory::new(db).build().await`.
pub async fn create_last_sent_author(
    db: &DatabaseConnection,
) -> Result<entity::last_sent_author::Model, DbErr> {
    LastSentAuthorFactory::new(db).build().await
}
