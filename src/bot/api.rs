//! Outbound Discord operations used by the control loop.

use std::sync::Arc;

use serenity::all::{Cache, ChannelId, CreateMessage, EditMessage, GuildId, Http, MessageId};
use serenity::async_trait;

use crate::bot::subscription::GuildSubscription;
use crate::error::{bot::BotError, AppError};

/// Calls the control loop makes against Discord.
///
/// All calls may block the loop until Discord answers.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Resolves the guild a channel belongs to.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - The channel is known and belongs to a guild
    /// - `Err(AppError::BotErr(ChannelUnavailable))` - Not resolvable yet
    async fn channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError>;

    /// Starts guild-scoped event delivery for `guild_id`.
    async fn subscribe_guild(&self, guild_id: GuildId) -> Result<(), AppError>;

    /// Posts a new message and returns its ID.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError>;

    /// Replaces the content of an existing message.
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError>;

    /// Posts `content` as a reply to `reply_to`.
    async fn reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        content: &str,
    ) -> Result<(), AppError>;
}

/// `DiscordApi` backed by the serenity client's cache and HTTP client.
pub struct SerenityApi {
    http: Arc<Http>,
    cache: Arc<Cache>,
    subscription: GuildSubscription,
}

impl SerenityApi {
    /// Creates the API from the client's shared handles.
    ///
    /// # Arguments
    /// - `http` - Client HTTP handle used for sends and edits
    /// - `cache` - Client cache used to resolve channels without API calls
    /// - `subscription` - Guild filter shared with the gateway event handler
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, subscription: GuildSubscription) -> Self {
        Self {
            http,
            cache,
            subscription,
        }
    }
}

#[async_trait]
impl DiscordApi for SerenityApi {
    async fn channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError> {
        // Cache only; the channel shows up once its guild-create has been processed.
        self.cache
            .channel(channel_id)
            .map(|channel| channel.guild_id)
            .ok_or_else(|| BotError::ChannelUnavailable(channel_id).into())
    }

    async fn subscribe_guild(&self, guild_id: GuildId) -> Result<(), AppError> {
        if !self.subscription.subscribe(guild_id) {
            tracing::debug!(
                guild_id = %guild_id,
                "Guild subscription was already in place"
            );
        }

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError> {
        let message = channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        channel_id
            .edit_message(&self.http, message_id, EditMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        channel_id
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(content)
                    .reference_message((channel_id, reply_to)),
            )
            .await?;

        Ok(())
    }
}
