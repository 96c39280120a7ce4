mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use std::process::ExitCode;

use tokio_util::sync::CancellationToken;

use crate::bot::{
    api::SerenityApi, control::ControlLoop, start, subscription::GuildSubscription,
};
use crate::config::Config;
use crate::data::last_sent_author::LastSentAuthorRepository;
use crate::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Bot has been stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!(
        state_directory = %config.state_directory.display(),
        "Opening the announcement store"
    );
    let db = startup::connect_to_database(&config).await?;

    let subscription = GuildSubscription::new();
    let (client, events) = start::init_bot(&config, subscription.clone()).await?;

    let api = SerenityApi::new(client.http.clone(), client.cache.clone(), subscription);
    let store = LastSentAuthorRepository::new(db);
    let control = ControlLoop::new(&config.bot, api, store);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for the interrupt signal: {}", e);
            return;
        }
        tracing::info!("Received interrupt signal");
        signal_token.cancel();
    });

    start::run(client, control, events, shutdown).await
}
