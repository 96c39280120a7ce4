use std::sync::{Arc, OnceLock};

use serenity::all::GuildId;

/// The guild whose message events are delivered to the control loop.
///
/// Shared between the gateway event handler, which filters on it, and the
/// outbound API, which sets it. Once set it never changes.
#[derive(Debug, Clone, Default)]
pub struct GuildSubscription(Arc<OnceLock<GuildId>>);

impl GuildSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts delivering events for `guild_id`.
    ///
    /// # Returns
    /// - `true` - The subscription was recorded by this call
    /// - `false` - A guild was already subscribed; nothing changed
    pub fn subscribe(&self, guild_id: GuildId) -> bool {
        self.0.set(guild_id).is_ok()
    }

    pub fn guild_id(&self) -> Option<GuildId> {
        self.0.get().copied()
    }

    /// Whether an event from `guild_id` should be delivered.
    pub fn accepts(&self, guild_id: Option<GuildId>) -> bool {
        match (self.guild_id(), guild_id) {
            (Some(subscribed), Some(guild_id)) => subscribed == guild_id,
            _ => false,
        }
    }
}
