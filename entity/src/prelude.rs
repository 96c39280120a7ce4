pub use super::last_sent_author::Entity as LastSentAuthor;
