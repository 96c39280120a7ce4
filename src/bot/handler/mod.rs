use serenity::all::{Context, EventHandler, Guild, GuildId, Message, Ready};
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::bot::{event::BotEvent, subscription::GuildSubscription};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
///
/// Forwards gateway events into the control loop's queue and does nothing else.
pub struct Handler {
    pub events: UnboundedSender<BotEvent>,
    pub subscription: GuildSubscription,
}

impl Handler {
    pub fn new(events: UnboundedSender<BotEvent>, subscription: GuildSubscription) -> Self {
        Self {
            events,
            subscription,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.events, ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, _ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.events, guilds);
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(&self.events, guild);
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.events, &self.subscription, message);
    }
}
