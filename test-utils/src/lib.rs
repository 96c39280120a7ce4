//! Herald Test Utils
//!
//! Provides shared testing utilities for the herald bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories for
//! seeding stored announcement records.
//!
//! # Overview
//!
//! The test utilities consist of main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Gateway payload factories for handler tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::LastSentAuthor;
//!
//! #[tokio::test]
//! async fn test_store_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(LastSentAuthor)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
