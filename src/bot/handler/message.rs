use serenity::all::Message;
use tokio::sync::mpsc::UnboundedSender;

use crate::bot::{event::BotEvent, subscription::GuildSubscription};
use crate::model::message::IncomingMessage;

/// Handle message creation in a channel
///
/// Only messages from the subscribed guild reach the control loop.
pub fn handle_message(
    events: &UnboundedSender<BotEvent>,
    subscription: &GuildSubscription,
    message: Message,
) {
    if !subscription.accepts(message.guild_id) {
        return;
    }

    let incoming = IncomingMessage::from_message(&message);
    if events.send(BotEvent::MessageCreate(incoming)).is_err() {
        tracing::debug!(
            "Dropped message {} in channel {}: control loop has stopped",
            message.id,
            message.channel_id
        );
    }
}
