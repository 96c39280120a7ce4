use serenity::all::{GuildId, UserId};

use crate::model::message::IncomingMessage;

/// Gateway events forwarded to the control loop.
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// The session is established and the bot knows who it is.
    Ready { self_id: UserId, name: String },
    /// Every guild from the ready payload has been received and cached.
    ReadySupplemental,
    /// A guild became available.
    GuildCreate { guild_id: GuildId },
    /// A message was posted in the subscribed guild.
    MessageCreate(IncomingMessage),
}
