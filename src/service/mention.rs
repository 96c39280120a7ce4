use serenity::all::UserId;

use crate::model::message::IncomingMessage;

/// Decides whether a message explicitly addresses the bot.
///
/// Mention expansion depends on data the gateway maintains (cached users, roles),
/// so it is injected into the parser instead of re-implemented there.
pub trait MentionResolver: Send + Sync {
    fn resolves_self_mention(&self, self_id: UserId, message: &IncomingMessage) -> bool;
}

/// Accepts only an explicit user mention of the bot.
///
/// Role mentions and `@everyone`/`@here` never count, even if the bot would be
/// notified by them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitMention;

impl MentionResolver for ExplicitMention {
    fn resolves_self_mention(&self, self_id: UserId, message: &IncomingMessage) -> bool {
        message.mentioned_user_ids.contains(&self_id)
    }
}
