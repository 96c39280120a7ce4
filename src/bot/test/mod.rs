//! Control loop scenarios driven through fake Discord and store backends.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use serenity::async_trait;

use crate::bot::{api::DiscordApi, control::ControlLoop, event::BotEvent, reply};
use crate::config::BotConfig;
use crate::data::last_sent_author::AnnouncementStore;
use crate::error::{bot::BotError, AppError};
use crate::model::message::IncomingMessage;


const BOT_ID: u64 = 500;
const GUILD_ID: u64 = 600;
const ROLE_ID: u64 = 700;
const TARGET_CHANNEL_ID: u64 = 800;
const COMMAND_CHANNEL_ID: u64 = 900;
const AUTHOR_ID: u64 = 42;

/// An outbound call recorded by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
enum ApiCall {
    ChannelGuild(ChannelId),
    SubscribeGuild(GuildId),
    Send {
        channel_id: ChannelId,
        content: String,
    },
    Edit {
        channel_id: ChannelId,
        message_id: MessageId,
        content: String,
    },
    Reply {
        channel_id: ChannelId,
        reply_to: MessageId,
        content: String,
    },
}

#[derive(Default)]
struct FakeApiState {
    calls: Vec<ApiCall>,
    /// Guild the target channel resolves to; `None` while it is not cached.
    channel_guild: Option<GuildId>,
    sent: u64,
    fail_send: bool,
    fail_edit: bool,
}

/// Recording `DiscordApi`; clones share their state.
#[derive(Clone, Default)]
struct FakeApi(Arc<Mutex<FakeApiState>>);

impl FakeApi {
    /// API whose target channel already resolves to the test guild.
    fn resolving() -> Self {
        let api = Self::default();
        api.set_channel_guild(Some(GuildId::new(GUILD_ID)));
        api
    }

    fn set_channel_guild(&self, guild_id: Option<GuildId>) {
        self.0.lock().unwrap().channel_guild = guild_id;
    }

    fn fail_send(&self, fail: bool) {
        self.0.lock().unwrap().fail_send = fail;
    }

    fn fail_edit(&self, fail: bool) {
        self.0.lock().unwrap().fail_edit = fail;
    }

    fn calls(&self) -> Vec<ApiCall> {
        self.0.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.0.lock().unwrap().calls.clear();
    }

    fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    /// Reply contents, in order.
    fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Reply { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.0.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl DiscordApi for FakeApi {
    async fn channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError> {
        self.record(ApiCall::ChannelGuild(channel_id));
        let guild_id = self.0.lock().unwrap().channel_guild;
        guild_id.ok_or_else(|| BotError::ChannelUnavailable(channel_id).into())
    }

    async fn subscribe_guild(&self, guild_id: GuildId) -> Result<(), AppError> {
        self.record(ApiCall::SubscribeGuild(guild_id));
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<MessageId, AppError> {
        self.record(ApiCall::Send {
            channel_id,
            content: content.to_string(),
        });

        let mut state = self.0.lock().unwrap();
        if state.fail_send {
            return Err(serenity::Error::Other("send failed").into());
        }
        state.sent += 1;
        Ok(MessageId::new(10_000 + state.sent))
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        self.record(ApiCall::Edit {
            channel_id,
            message_id,
            content: content.to_string(),
        });

        if self.0.lock().unwrap().fail_edit {
            return Err(serenity::Error::Other("edit failed").into());
        }
        Ok(())
    }

    async fn reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        self.record(ApiCall::Reply {
            channel_id,
            reply_to,
            content: content.to_string(),
        });
        Ok(())
    }
}

#[derive(Default)]
struct MemoryStoreState {
    records: HashMap<UserId, MessageId>,
    fail_load: bool,
    fail_store: bool,
}

/// In-memory `AnnouncementStore` with switchable failures; clones share their state.
#[derive(Clone, Default)]
struct MemoryStore(Arc<Mutex<MemoryStoreState>>);

impl MemoryStore {
    fn fail_load(&self, fail: bool) {
        self.0.lock().unwrap().fail_load = fail;
    }

    fn fail_store(&self, fail: bool) {
        self.0.lock().unwrap().fail_store = fail;
    }

    fn get(&self, author_id: UserId) -> Option<MessageId> {
        self.0.lock().unwrap().records.get(&author_id).copied()
    }
}

#[async_trait]
impl AnnouncementStore for MemoryStore {
    async fn load(&self, author_id: UserId) -> Result<Option<MessageId>, AppError> {
        let state = self.0.lock().unwrap();
        if state.fail_load {
            return Err(sea_orm::DbErr::Custom("load failed".to_string()).into());
        }
        Ok(state.records.get(&author_id).copied())
    }

    async fn store(&self, author_id: UserId, message_id: MessageId) -> Result<(), AppError> {
        let mut state = self.0.lock().unwrap();
        if state.fail_store {
            return Err(sea_orm::DbErr::Custom("store failed".to_string()).into());
        }
        state.records.insert(author_id, message_id);
        Ok(())
    }
}

fn config() -> BotConfig {
    BotConfig {
        target_channel_id: ChannelId::new(TARGET_CHANNEL_ID),
        allowed_role_ids: [RoleId::new(ROLE_ID)].into_iter().collect(),
        min_announce_gap: Duration::hours(4),
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn ready() -> BotEvent {
    BotEvent::Ready {
        self_id: UserId::new(BOT_ID),
        name: "herald".to_string(),
    }
}

/// A message from an authorized member of the test guild.
fn message(message_id: u64, author_id: u64, content: &str) -> IncomingMessage {
    IncomingMessage {
        id: MessageId::new(message_id),
        channel_id: ChannelId::new(COMMAND_CHANNEL_ID),
        guild_id: Some(GuildId::new(GUILD_ID)),
        author_id: UserId::new(author_id),
        author_name: format!("author-{}", author_id),
        member_role_ids: Some(vec![RoleId::new(ROLE_ID)]),
        mentioned_user_ids: vec![UserId::new(BOT_ID)],
        mentions_everyone: false,
        content: content.to_string(),
    }
}

fn command(message_id: u64, author_id: u64, content: &str) -> BotEvent {
    BotEvent::MessageCreate(message(message_id, author_id, content))
}

/// The reply the bot sends to `author_id` with the given fixed text.
fn reply_to(author_id: u64, text: &str) -> String {
    reply::format_reply(UserId::new(author_id), text)
}

/// Builds a loop and runs it through a successful ready/subscribe sequence.
async fn ready_loop<'a, S: AnnouncementStore>(
    config: &'a BotConfig,
    api: &FakeApi,
    store: S,
) -> ControlLoop<'a, FakeApi, S> {
    let mut control = ControlLoop::new(config, api.clone(), store);
    control.handle_event(ready(), t0()).await;
    assert_eq!(control.state().target_guild_id, Some(GuildId::new(GUILD_ID)));

    api.clear_calls();
    control
}
