//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// ID of the author of every message created by [`create_test_message`].
pub const TEST_AUTHOR_ID: u64 = 42;

/// Creates a test Serenity Message posted by [`TEST_AUTHOR_ID`].
///
/// Guild messages carry partial member data with no roles, the same way Discord
/// attaches it to message-create events. Direct messages (`guild_id` of `None`)
/// carry no member data.
///
/// # Arguments
/// - `guild_id` - Guild the message was posted in, `None` for a direct message
/// - `content` - Raw message content
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(guild_id: Option<u64>, content: &str) -> Message {
    let mut payload = serde_json::json!({
        "id": "1000",
        "channel_id": "2000",
        "author": {
            "id": TEST_AUTHOR_ID.to_string(),
            "username": "author",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    });

    if let Some(guild_id) = guild_id {
        payload["guild_id"] = serde_json::json!(guild_id.to_string());
        payload["member"] = serde_json::json!({
            "roles": [],
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "deaf": false,
            "mute": false,
        });
    }

    serde_json::from_value(payload).expect("Failed to create test message - invalid JSON structure")
}
