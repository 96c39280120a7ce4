//! Last-announcement store backed by the `last_sent_authors_v1` table.
//!
//! Each author has at most one row, holding the message ID of the most recent
//! announcement posted on their behalf. Rows are overwritten on every successful
//! announce and never deleted; a missing row means "no announcement yet".

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use serenity::all::{MessageId, UserId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::last_sent_author::{LastSentAuthor, UpsertLastSentAuthorParam};

/// Durable mapping from author to their latest announcement message.
///
/// A successful `store` is durable, and a following `load` for the same author
/// observes it. Failures are returned to the caller; deciding whether they are
/// fatal for a command is the dispatcher's job.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Looks up the author's latest announcement.
    ///
    /// # Returns
    /// - `Ok(Some(MessageId))` - A record exists
    /// - `Ok(None)` - The author never announced anything
    /// - `Err(AppError)` - The underlying engine failed
    async fn load(&self, author_id: UserId) -> Result<Option<MessageId>, AppError>;

    /// Records `message_id` as the author's latest announcement, replacing any
    /// previous value.
    async fn store(&self, author_id: UserId, message_id: MessageId) -> Result<(), AppError>;
}

/// Repository providing database operations for last-sent-author records.
///
/// Holds a clone of the connection pool handle so it can live as long as the
/// control loop that owns it.
#[derive(Clone)]
pub struct LastSentAuthorRepository {
    db: DatabaseConnection,
}

impl LastSentAuthorRepository {
    /// Creates a new LastSentAuthorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `LastSentAuthorRepository` - New repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the record for an author.
    ///
    /// # Arguments
    /// - `author_id` - Discord user ID of the author
    ///
    /// # Returns
    /// - `Ok(Some(LastSentAuthor))` - Record found for the author
    /// - `Ok(None)` - No record exists for this author
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored IDs could not be parsed
    pub async fn get_by_author_id(
        &self,
        author_id: UserId,
    ) -> Result<Option<LastSentAuthor>, AppError> {
        let entity = entity::prelude::LastSentAuthor::find_by_id(author_id.to_string())
            .one(&self.db)
            .await?;

        entity.map(LastSentAuthor::from_entity).transpose()
    }

    /// Creates or overwrites the record for an author.
    ///
    /// # Arguments
    /// - `param` - Author and the message ID of their new announcement
    ///
    /// # Returns
    /// - `Ok(LastSentAuthor)` - The stored record
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertLastSentAuthorParam,
    ) -> Result<LastSentAuthor, AppError> {
        let author_id = param.author_id.to_string();
        let existing = entity::prelude::LastSentAuthor::find_by_id(author_id.clone())
            .one(&self.db)
            .await?;

        let record = entity::last_sent_author::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        let entity = if existing.is_some() {
            record.update(&self.db).await?
        } else {
            record.insert(&self.db).await?
        };

        LastSentAuthor::from_entity(entity)
    }
}

#[async_trait]
impl AnnouncementStore for LastSentAuthorRepository {
    async fn load(&self, author_id: UserId) -> Result<Option<MessageId>, AppError> {
        Ok(self
            .get_by_author_id(author_id)
            .await?
            .map(|record| record.message_id))
    }

    async fn store(&self, author_id: UserId, message_id: MessageId) -> Result<(), AppError> {
        self.upsert(UpsertLastSentAuthorParam {
            author_id,
            message_id,
        })
        .await?;

        Ok(())
    }
}
