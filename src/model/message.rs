//! Transport-neutral view of an incoming Discord message.

use serenity::all::{ChannelId, GuildId, Message, MessageId, RoleId, UserId};

/// The parts of a message-create event the command protocol looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    /// `None` for direct messages.
    pub guild_id: Option<GuildId>,
    pub author_id: UserId,
    pub author_name: String,
    /// Roles of the author, or `None` when the event carries no member data.
    pub member_role_ids: Option<Vec<RoleId>>,
    /// Users mentioned explicitly in the content.
    pub mentioned_user_ids: Vec<UserId>,
    /// Whether the message pings `@everyone` or `@here`.
    pub mentions_everyone: bool,
    pub content: String,
}

impl IncomingMessage {
    /// Converts a serenity message at the gateway boundary.
    ///
    /// # Arguments
    /// - `message` - Message from a `message` gateway event
    ///
    /// # Returns
    /// - `IncomingMessage` - Owned copy of the fields used for command parsing
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            author_id: message.author.id,
            author_name: message.author.name.clone(),
            member_role_ids: message.member.as_ref().map(|member| member.roles.clone()),
            mentioned_user_ids: message.mentions.iter().map(|user| user.id).collect(),
            mentions_everyone: message.mention_everyone,
            content: message.content.clone(),
        }
    }
}
