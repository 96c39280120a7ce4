//! Domain models shared between the bot, service and data layers.
//!
//! Models are converted from serenity or SeaORM types at the layer boundary so the
//! parser and control loop never depend on transport or storage representations.

pub mod command;
pub mod last_sent_author;
pub mod message;
