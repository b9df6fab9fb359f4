pub mod utility;

use tracing::error;
use twilight_model::gateway::payload::incoming::MessageCreate;

use rusty_core::{COMMAND_PREFIX, Context};

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::choose::META,
    // Add new commands here
];

/// Split a raw message into a lowercase command name and its first argument.
fn parse_command(content: &str) -> Option<(String, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next()?.to_ascii_lowercase();
    if cmd.is_empty() {
        return None;
    }

    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .and_then(|rest| rest.split_whitespace().next());

    Some((cmd, arg1))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content_owned = msg.content.clone();
    let Some((cmd, arg1)) = parse_command(&content_owned) else {
        return Ok(());
    };

    let result = match cmd.as_str() {
        "choose" => utility::choose::run(ctx, msg, arg1).await,
        // Add new commands here
        _ => Ok(()),
    };

    if let Err(source) = result {
        error!(?source, command = %cmd, "command failed");
    }

    Ok(())
}
