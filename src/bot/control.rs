//! The announcement control loop.
//!
//! The loop owns all mutable bot state and consumes the merged gateway event queue
//! one event at a time:
//!
//! - `Ready` records the bot's identity and tries to subscribe to the target guild
//! - `ReadySupplemental` and `GuildCreate` retry the subscription until it succeeds
//! - `MessageCreate` runs the command parser and dispatches `announce` / `edit`
//!
//! Subscribing has to succeed within [`STARTUP_TIMEOUT`]; otherwise the loop stops
//! with [`BotError::StartupTimeout`]. Per-command failures are logged and answered
//! with the internal-error reply, and never stop the loop.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serenity::all::{GuildId, MessageId, UserId};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::bot::{api::DiscordApi, event::BotEvent, reply};
use crate::config::BotConfig;
use crate::data::last_sent_author::AnnouncementStore;
use crate::error::{bot::BotError, AppError};
use crate::model::{command::Verb, message::IncomingMessage};
use crate::service::{
    command::CommandParser,
    mention::{ExplicitMention, MentionResolver},
    rate_limit,
};

/// Time allowed between starting the loop and subscribing to the target guild.
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Mutable state owned exclusively by the control loop.
#[derive(Debug, Clone, Default)]
pub struct BotState {
    /// Set on the first ready event.
    pub self_id: Option<UserId>,
    /// Set once by the first successful subscription, then never changed.
    pub target_guild_id: Option<GuildId>,
    /// Moved forward only after an announcement was actually sent.
    pub last_announced_at: Option<DateTime<Utc>>,
}

/// Single consumer of the bot's event queue.
pub struct ControlLoop<'a, A, S, M = ExplicitMention> {
    config: &'a BotConfig,
    api: A,
    store: S,
    mentions: M,
    state: BotState,
}

impl<'a, A, S> ControlLoop<'a, A, S, ExplicitMention>
where
    A: DiscordApi,
    S: AnnouncementStore,
{
    /// Creates a loop that only accepts explicit user mentions of the bot.
    pub fn new(config: &'a BotConfig, api: A, store: S) -> Self {
        Self::with_mentions(config, api, store, ExplicitMention)
    }
}

impl<'a, A, S, M> ControlLoop<'a, A, S, M>
where
    A: DiscordApi,
    S: AnnouncementStore,
    M: MentionResolver,
{
    /// Creates a loop with a custom self-mention resolver.
    ///
    /// # Arguments
    /// - `config` - Immutable bot settings
    /// - `api` - Outbound Discord operations
    /// - `store` - Durable author to last-announcement mapping
    /// - `mentions` - Self-mention capability handed to the command parser
    pub fn with_mentions(config: &'a BotConfig, api: A, store: S, mentions: M) -> Self {
        Self {
            config,
            api,
            store,
            mentions,
            state: BotState::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Processes events until shutdown or a fatal error.
    ///
    /// # Arguments
    /// - `events` - Merged gateway event queue
    /// - `shutdown` - Cancelled when the process should stop
    ///
    /// # Returns
    /// - `Ok(())` - `shutdown` was cancelled
    /// - `Err(AppError::BotErr(StartupTimeout))` - No subscription within [`STARTUP_TIMEOUT`]
    /// - `Err(AppError::BotErr(EventStreamClosed))` - Every event sender was dropped
    pub async fn run(
        mut self,
        mut events: UnboundedReceiver<BotEvent>,
        shutdown: CancellationToken,
    ) -> Result<(), AppError> {
        let startup_deadline = tokio::time::sleep(STARTUP_TIMEOUT);
        tokio::pin!(startup_deadline);

        loop {
            let subscribed = self.state.target_guild_id.is_some();

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    tracing::info!("Bot is shutting down.");
                    return Ok(());
                }

                _ = &mut startup_deadline, if !subscribed => {
                    return Err(BotError::StartupTimeout(STARTUP_TIMEOUT).into());
                }

                event = events.recv() => match event {
                    Some(event) => self.handle_event(event, Utc::now()).await,
                    None => return Err(BotError::EventStreamClosed.into()),
                },
            }
        }
    }

    /// Handles a single event as of `now`.
    pub async fn handle_event(&mut self, event: BotEvent, now: DateTime<Utc>) {
        match event {
            BotEvent::Ready { self_id, name } => {
                self.state.self_id = Some(self_id);

                tracing::info!(
                    bot_id = %self_id,
                    bot_name = %name,
                    "This bot is online. It is preparing to serve."
                );

                // Subscribing right away tells Discord to start sending the
                // guild's message events.
                self.try_subscribe().await;
            }
            BotEvent::ReadySupplemental | BotEvent::GuildCreate { .. } => {
                self.try_subscribe().await;
            }
            BotEvent::MessageCreate(message) => self.handle_message(&message, now).await,
        }
    }

    /// Subscribes to the target channel's guild unless already done.
    ///
    /// # Returns
    /// - `true` - The guild is subscribed (now or earlier)
    /// - `false` - The channel could not be resolved yet, or subscribing failed
    pub async fn try_subscribe(&mut self) -> bool {
        if self.state.target_guild_id.is_some() {
            return true;
        }

        let channel_id = self.config.target_channel_id;
        let guild_id = match self.api.channel_guild(channel_id).await {
            Ok(guild_id) => guild_id,
            Err(e) => {
                tracing::info!(
                    channel_id = %channel_id,
                    "The bot tried to get the target channel, but it failed: {}",
                    e
                );
                return false;
            }
        };

        if let Err(e) = self.api.subscribe_guild(guild_id).await {
            tracing::error!(
                guild_id = %guild_id,
                "Bot has failed to subscribe to the target guild: {}",
                e
            );
            return false;
        }

        self.state.target_guild_id = Some(guild_id);

        tracing::info!(
            guild_id = %guild_id,
            channel_id = %channel_id,
            "Bot has subscribed to the target channel's guild. It is now ready to serve."
        );

        true
    }

    async fn handle_message(&mut self, message: &IncomingMessage, now: DateTime<Utc>) {
        let Some(self_id) = self.state.self_id else {
            return;
        };

        let parser = CommandParser::new(
            self_id,
            self.state.target_guild_id,
            self.config,
            &self.mentions,
        );
        let Some(command) = parser.parse(message) else {
            return;
        };

        tracing::info!(
            author_id = %message.author_id,
            author_name = %message.author_name,
            command = %command.command,
            body = %command.body,
            "This bot has received a valid command."
        );

        // Unknown commands are accepted by the parser but intentionally ignored.
        match command.verb() {
            Some(Verb::Announce) => self.announce(message, &command.body, now).await,
            Some(Verb::Edit) => self.edit(message, &command.body).await,
            None => {}
        }
    }

    async fn announce(&mut self, message: &IncomingMessage, body: &str, now: DateTime<Utc>) {
        if !rate_limit::allow(now, self.state.last_announced_at, self.config.min_announce_gap) {
            self.send_reply(message, reply::WAIT).await;
            return;
        }

        let channel_id = self.config.target_channel_id;
        let sent_id = match self.api.send_message(channel_id, body).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    channel_id = %channel_id,
                    "Bot has failed to send the announcement message: {}",
                    e
                );
                self.send_reply(message, reply::INTERNAL_ERROR).await;
                return;
            }
        };

        self.state.last_announced_at = Some(now);

        self.send_reply(message, reply::ANNOUNCED).await;

        // Best-effort: the announcement is already out.
        if let Err(e) = self.store.store(message.author_id, sent_id).await {
            tracing::warn!(
                author_id = %message.author_id,
                message_id = %sent_id,
                "Bot has failed to store the last message sent by the author: {}",
                e
            );
        }
    }

    async fn edit(&mut self, message: &IncomingMessage, body: &str) {
        let last_sent: MessageId = match self.store.load(message.author_id).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                self.send_reply(message, reply::NOT_FOUND).await;
                return;
            }
            Err(e) => {
                tracing::error!(
                    author_id = %message.author_id,
                    "Bot has failed to look up the last message sent by the author: {}",
                    e
                );
                self.send_reply(message, reply::INTERNAL_ERROR).await;
                return;
            }
        };

        let channel_id = self.config.target_channel_id;
        if let Err(e) = self.api.edit_message(channel_id, last_sent, body).await {
            tracing::error!(
                channel_id = %channel_id,
                message_id = %last_sent,
                "Bot has failed to edit the last announcement message: {}",
                e
            );
            self.send_reply(message, reply::INTERNAL_ERROR).await;
            return;
        }

        tracing::info!(
            author_id = %message.author_id,
            message_id = %last_sent,
            "Bot has edited the last announcement."
        );
    }

    async fn send_reply(&self, message: &IncomingMessage, text: &str) {
        let content = reply::format_reply(message.author_id, text);

        if let Err(e) = self
            .api
            .reply(message.channel_id, message.id, &content)
            .await
        {
            tracing::error!(
                channel_id = %message.channel_id,
                author_id = %message.author_id,
                "Bot has failed to deliver a reply: {}",
                e
            );
        }
    }
}
