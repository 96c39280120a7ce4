//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! rest of the bot never sees database representations.

pub mod last_sent_author;
