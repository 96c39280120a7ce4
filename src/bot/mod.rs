//! Discord bot integration and the announcement control loop.
//!
//! The serenity client runs the gateway connection in its own future. Its event
//! handler does no work itself: it converts the events the bot cares about into
//! [`event::BotEvent`] values and pushes them into a single queue. The
//! [`control::ControlLoop`] is the only consumer of that queue and the only owner of
//! the bot state, so events are handled strictly one at a time without locks.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild-create events and populate the channel cache
//! - `GUILD_MESSAGES` - Receive message events in guild channels
//! - `MESSAGE_CONTENT` - Read the command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod api;
pub mod control;
pub mod event;
pub mod handler;
pub mod reply;
pub mod start;
pub mod subscription;

#[cfg(test)]
mod test;
