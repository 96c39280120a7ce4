use serenity::all::Guild;
use tokio::sync::mpsc::UnboundedSender;

use crate::bot::event::BotEvent;

/// Forwards guild availability so the control loop can retry its subscription.
pub fn handle_guild_create(events: &UnboundedSender<BotEvent>, guild: Guild) {
    tracing::debug!("Guild create event: {} ({})", guild.name, guild.id);

    if events
        .send(BotEvent::GuildCreate { guild_id: guild.id })
        .is_err()
    {
        tracing::debug!("Dropped guild create event: control loop has stopped");
    }
}
