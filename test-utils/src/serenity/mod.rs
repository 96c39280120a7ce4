//! Test factories for creating Serenity gateway objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! the payloads Discord sends over the gateway.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_message};
//!
//! let guild = create_test_guild(123456789, "Test Guild");
//! let message = create_test_message(Some(123456789), "<@1> announce\nHello");
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod guild;
pub mod message;

pub use guild::create_test_guild;
pub use message::create_test_message;
