use std::time::Duration;

use serenity::all::ChannelId;
use thiserror::Error;

/// Errors raised by the bot's lifecycle rather than by a single command.
#[derive(Error, Debug)]
pub enum BotError {
    /// The target guild was not subscribed before the startup deadline.
    ///
    /// Not retried; the process supervisor is expected to restart the bot.
    #[error("bot has failed to start up in time ({0:?})")]
    StartupTimeout(Duration),

    /// The target channel is not (yet) in the cache.
    ///
    /// Transient while the gateway is still delivering guilds.
    #[error("target channel {0} is not available yet")]
    ChannelUnavailable(ChannelId),

    /// Every sender of the event queue was dropped.
    #[error("the gateway event stream has closed")]
    EventStreamClosed,

    /// The gateway connection ended without a shutdown being requested.
    #[error("the gateway connection has stopped")]
    TransportClosed,
}
