//! Parser for the announcement command protocol.
//!
//! The bot expects a message of the following format:
//!
//! ```text
//! <@botID> command
//! body
//! ```
//!
//! The command is case-insensitive. The newline is required, and the body is kept
//! verbatim (it may span several lines). Anything that does not match, or comes from
//! someone without an allowed role, is simply not a command: the parser returns
//! `None` and nothing is logged or replied.

use serenity::all::{GuildId, UserId};

use crate::config::BotConfig;
use crate::model::{command::ParsedCommand, message::IncomingMessage};
use crate::service::mention::MentionResolver;

/// Parses commands addressed to the bot in the target guild.
pub struct CommandParser<'a, M: MentionResolver + ?Sized> {
    self_id: UserId,
    target_guild_id: Option<GuildId>,
    config: &'a BotConfig,
    mentions: &'a M,
}

impl<'a, M: MentionResolver + ?Sized> CommandParser<'a, M> {
    /// Creates a parser for the bot's current identity.
    ///
    /// # Arguments
    /// - `self_id` - The bot's own user ID
    /// - `target_guild_id` - Subscribed guild, `None` while still subscribing
    /// - `config` - Bot settings holding the allowed roles
    /// - `mentions` - Self-mention capability
    pub fn new(
        self_id: UserId,
        target_guild_id: Option<GuildId>,
        config: &'a BotConfig,
        mentions: &'a M,
    ) -> Self {
        Self {
            self_id,
            target_guild_id,
            config,
            mentions,
        }
    }

    /// Parses the command from the message, performing the permission checks.
    ///
    /// Checks, in order:
    /// 1. The message comes from a member of the target guild
    /// 2. The message explicitly mentions the bot
    /// 3. The author holds at least one allowed role
    /// 4. The content has a header line and a body, split on the first newline
    /// 5. The header starts with the bot's mention and names a non-empty command
    /// 6. The body is non-empty
    ///
    /// # Returns
    /// - `Some(ParsedCommand)` - Well-formed, authorized command
    /// - `None` - Any check failed
    pub fn parse(&self, message: &IncomingMessage) -> Option<ParsedCommand> {
        // The message must come from a member of the same guild.
        let role_ids = message.member_role_ids.as_ref()?;
        if self.target_guild_id.is_none() || message.guild_id != self.target_guild_id {
            return None;
        }

        // The message must explicitly mention it.
        if !self.mentions.resolves_self_mention(self.self_id, message) {
            return None;
        }

        if !role_ids
            .iter()
            .any(|id| self.config.allowed_role_ids.contains(id))
        {
            return None;
        }

        let (header, body) = message.content.split_once('\n')?;

        let command = self.strip_self_mention(header)?.trim().to_lowercase();
        if command.is_empty() || body.is_empty() {
            return None;
        }

        Some(ParsedCommand {
            command,
            body: body.to_string(),
        })
    }

    /// Removes the leading self-mention from the header.
    ///
    /// Both the plain (`<@id>`) and the legacy nickname (`<@!id>`) forms are
    /// accepted.
    fn strip_self_mention<'h>(&self, header: &'h str) -> Option<&'h str> {
        let plain = format!("<@{}>", self.self_id);
        let nickname = format!("<@!{}>", self.self_id);

        header
            .strip_prefix(plain.as_str())
            .or_else(|| header.strip_prefix(nickname.as_str()))
    }
}
