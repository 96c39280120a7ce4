//! Domain models for the per-author "last announcement" record.

use chrono::{DateTime, Utc};
use serenity::all::{MessageId, UserId};

use crate::error::AppError;
use crate::util::parse::parse_id_from_string;

/// Most recent announcement message posted for an author.
#[derive(Debug, Clone, PartialEq)]
pub struct LastSentAuthor {
    /// Discord user who issued the announce command.
    pub author_id: UserId,
    /// Announcement message in the target channel.
    pub message_id: MessageId,
    /// When the record was last overwritten.
    pub updated_at: DateTime<Utc>,
}

impl LastSentAuthor {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(LastSentAuthor)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored ID is not a valid snowflake
    pub fn from_entity(entity: entity::last_sent_author::Model) -> Result<Self, AppError> {
        Ok(Self {
            author_id: UserId::new(parse_id_from_string(&entity.author_id)?.get()),
            message_id: MessageId::new(parse_id_from_string(&entity.message_id)?.get()),
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for recording an author's latest announcement.
///
/// Overwrites any previous record for the same author.
#[derive(Debug, Clone)]
pub struct UpsertLastSentAuthorParam {
    pub author_id: UserId,
    pub message_id: MessageId,
}
