//! Fixed replies sent back to the author of a command.

use serenity::all::{Mentionable, UserId};

pub const WAIT: &str = "please wait before sending another announcement.";
pub const NOT_FOUND: &str = "this bot could not find the last announcement you sent.";
pub const INTERNAL_ERROR: &str =
    "this bot has encountered an internal error. This error has been logged.";
pub const ANNOUNCED: &str = "the announcement has been sent.";

/// Prefixes `text` with a mention of the author.
pub fn format_reply(author_id: UserId, text: &str) -> String {
    format!("{}, {}", author_id.mention(), text)
}
