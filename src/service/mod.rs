//! Command protocol logic, independent of the gateway and the database.
//!
//! - `mention` - capability for deciding whether a message addresses the bot
//! - `command` - parses and authorizes `@bot <command>\n<body>` messages
//! - `rate_limit` - global minimum gap between announcements

pub mod command;
pub mod mention;
pub mod rate_limit;
