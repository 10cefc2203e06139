use serde_json::{Value, json};
use serenity::model::event::Event;

pub fn user_json(id: u64, username: &str) -> Value {
    json!({
        "id": id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}

/// A message object as returned by the create message endpoint
pub fn message_json(message_id: u64, channel_id: u64, content: &str) -> Value {
    json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(1, "buttonbot"),
        "content": content,
        "timestamp": "2024-01-15T12:34:56.789000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    })
}

/// Fields every gateway interaction carries besides its own body
fn with_interaction_envelope(mut body: Value) -> Value {
    body["application_id"] = json!("1");
    body["token"] = json!("interaction-token");
    body["version"] = json!(1);
    body["locale"] = json!("en-US");
    body["entitlements"] = json!([]);
    body["attachment_size_limit"] = json!(26214400);
    body
}

fn member_json(user_id: u64) -> Value {
    json!({
        "user": user_json(user_id, "presser"),
        "nick": null,
        "roles": [],
        "joined_at": "2023-06-01T00:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
    })
}

/// `d` payload of a component INTERACTION_CREATE dispatch in a guild
pub fn guild_press_json(custom_id: &str, guild_id: u64, user_id: u64) -> Value {
    with_interaction_envelope(json!({
        "type": 3,
        "id": "900",
        "guild_id": guild_id.to_string(),
        "channel_id": "777",
        "member": member_json(user_id),
        "message": message_json(555, 777, "Pick one"),
        "data": {"custom_id": custom_id, "component_type": 2},
    }))
}

/// `d` payload of a string select INTERACTION_CREATE dispatch in a guild
pub fn select_press_json(custom_id: &str, values: &[&str]) -> Value {
    with_interaction_envelope(json!({
        "type": 3,
        "id": "903",
        "guild_id": "888",
        "channel_id": "777",
        "member": member_json(42),
        "message": message_json(555, 777, "Pick one"),
        "data": {"custom_id": custom_id, "component_type": 3, "values": values},
    }))
}

/// `d` payload of a component INTERACTION_CREATE dispatch in a DM
pub fn direct_press_json(custom_id: &str, user_id: u64) -> Value {
    with_interaction_envelope(json!({
        "type": 3,
        "id": "901",
        "channel_id": "778",
        "user": user_json(user_id, "dm_user"),
        "message": message_json(556, 778, "Pick one"),
        "data": {"custom_id": custom_id, "component_type": 2},
    }))
}

/// `d` payload of a slash command INTERACTION_CREATE dispatch
pub fn command_json() -> Value {
    with_interaction_envelope(json!({
        "type": 2,
        "id": "902",
        "channel_id": "777",
        "user": user_json(43, "commander"),
        "data": {"id": "3", "name": "ping", "type": 1},
    }))
}

/// Typed serenity event for an INTERACTION_CREATE dispatch payload
pub fn interaction_create_event(data: Value) -> Event {
    Event::InteractionCreate(serde_json::from_value(data).expect("complete interaction payload"))
}
