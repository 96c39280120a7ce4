//! Ready event handlers.
//!
//! `ready` fires once per gateway session after the handshake. `cache_ready` fires
//! after every guild listed in the ready payload has arrived and been cached, which
//! is the earliest point the target channel can be resolved from the cache.

use serenity::all::{Context, GuildId, OnlineStatus, Ready};
use tokio::sync::mpsc::UnboundedSender;

use crate::bot::event::BotEvent;

/// Handles the ready event when the bot connects to Discord.
///
/// Marks the bot as idle, since it only acts when addressed, and forwards its
/// identity to the control loop.
///
/// # Arguments
/// - `events` - Control loop queue
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(events: &UnboundedSender<BotEvent>, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_presence(None, OnlineStatus::Idle);

    let event = BotEvent::Ready {
        self_id: ready.user.id,
        name: ready.user.name.clone(),
    };
    if events.send(event).is_err() {
        tracing::debug!("Dropped ready event: control loop has stopped");
    }
}

/// Handles the cache-ready event.
pub fn handle_cache_ready(events: &UnboundedSender<BotEvent>, guilds: Vec<GuildId>) {
    tracing::debug!("Cache is ready with {} guilds", guilds.len());

    if events.send(BotEvent::ReadySupplemental).is_err() {
        tracing::debug!("Dropped cache ready event: control loop has stopped");
    }
}
