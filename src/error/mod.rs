//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from the control
//! loop. Anything that reaches `main` as an `AppError` stops the process with exit
//! code 1; per-command failures are handled inside the control loop and never
//! propagate this far.

pub mod bot;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{bot::BotError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Bot lifecycle error (startup deadline, closed event stream, lost transport).
    #[error(transparent)]
    BotErr(#[from] BotError),

    /// Unexpected internal state, such as a stored ID that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while preparing the state directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
