//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the
//! values they assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let record = factory::create_last_sent_author(&db).await?;
//!
//!     // Create with custom values
//!     let record = factory::last_sent_author::LastSentAuthorFactory::new(&db)
//!         .author_id(42)
//!         .message_id(1337)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod last_sent_author;

pub use last_sent_author::create_last_sent_author;
