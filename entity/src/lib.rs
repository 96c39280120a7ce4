//! SeaORM entities for the bot's persisted state.

pub mod prelude;

pub mod last_sent_author;
