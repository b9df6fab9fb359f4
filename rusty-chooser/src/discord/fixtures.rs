//! Gateway-shaped interactions for tests.

use serde_json::{Value, json};
use twilight_model::application::interaction::Interaction;

pub const CHANNEL_ID: u64 = 300;

fn user() -> Value {
    json!({
        "id": "400",
        "username": "tester",
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}

fn message(message_id: u64) -> Value {
    json!({
        "id": message_id.to_string(),
        "channel_id": CHANNEL_ID.to_string(),
        "author": user(),
        "content": "Select an option:",
        "timestamp": "2026-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "sticker_items": [],
        "components": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    })
}

fn interaction(kind: u8, data: Option<Value>, message: Option<Value>) -> Interaction {
    let mut raw = json!({
        "id": "100",
        "application_id": "200",
        "type": kind,
        "token": "interaction-token",
        "version": 1,
        "channel_id": CHANNEL_ID.to_string(),
        "user": user(),
        "locale": "en-US",
        "app_permissions": "0",
        "authorizing_integration_owners": {},
        "entitlements": [],
        "context": 1,
        "attachment_size_limit": 8_388_608,
    });

    if let Some(data) = data {
        raw["data"] = data;
    }
    if let Some(message) = message {
        raw["message"] = message;
    }

    serde_json::from_value(raw).expect("valid interaction json")
}

fn component_data(custom_id: &str, values: &[&str]) -> Value {
    json!({
        "custom_id": custom_id,
        "component_type": if values.is_empty() { 2 } else { 3 },
        "values": values,
    })
}

/// A button press or select on `message_id`.
pub fn component_interaction(message_id: u64, custom_id: &str, values: &[&str]) -> Interaction {
    interaction(
        3,
        Some(component_data(custom_id, values)),
        Some(message(message_id)),
    )
}

/// A component interaction whose message was not included.
pub fn detached_component_interaction(custom_id: &str) -> Interaction {
    interaction(3, Some(component_data(custom_id, &[])), None)
}

pub fn command_interaction() -> Interaction {
    interaction(1, None, None)
}
