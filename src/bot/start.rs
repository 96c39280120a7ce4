use serenity::all::{Client, GatewayIntents};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;

use crate::bot::{
    api::DiscordApi, control::ControlLoop, event::BotEvent, handler::Handler,
    subscription::GuildSubscription,
};
use crate::config::Config;
use crate::data::last_sent_author::AnnouncementStore;
use crate::error::{bot::BotError, AppError};
use crate::service::mention::MentionResolver;

/// Builds the Discord client and the queue its events are forwarded into.
///
/// # Arguments
/// - `config` - Configuration holding the bot token
/// - `subscription` - Guild filter shared with the outbound API
///
/// # Returns
/// - `Ok((Client, UnboundedReceiver<BotEvent>))` - Client ready to start, and its event queue
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    subscription: GuildSubscription,
) -> Result<(Client, UnboundedReceiver<BotEvent>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let (tx, rx) = mpsc::unbounded_channel();
    let handler = Handler::new(tx, subscription);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok((client, rx))
}

/// Runs the gateway connection and the control loop until either stops.
///
/// The gateway connection is shut down before returning, whichever side stopped
/// first.
///
/// # Returns
/// - `Ok(())` - Shutdown was requested
/// - `Err(AppError)` - The control loop failed, or the connection ended on its own
pub async fn run<A, S, M>(
    mut client: Client,
    control: ControlLoop<'_, A, S, M>,
    events: UnboundedReceiver<BotEvent>,
    shutdown: CancellationToken,
) -> Result<(), AppError>
where
    A: DiscordApi,
    S: AnnouncementStore,
    M: MentionResolver,
{
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot...");

    let result = tokio::select! {
        result = control.run(events, shutdown) => result,
        result = client.start() => match result {
            Ok(()) => Err(BotError::TransportClosed.into()),
            Err(e) => Err(e.into()),
        },
    };

    shard_manager.shutdown_all().await;

    result
}
