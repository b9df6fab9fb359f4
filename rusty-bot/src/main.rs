use std::sync::Arc;

use tracing::{debug, error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use rusty_chooser::discord::ComponentWaiters;
use rusty_commands::handle_message;
use rusty_core::{BotConfig, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Honours RUST_LOG through the env-filter feature
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Reads .env, then DISCORD_TOKEN and the chooser settings
    let config = BotConfig::from_env()?;
    let token = config.token.clone();

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    // Routes component interactions to the chooser pages waiting on them
    let waiters = ComponentWaiters::new();
    let ctx = Context::new(Arc::clone(&http), waiters.clone(), config);

    // Declare which intents the bot has
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Rusty is connecting...");

    // Our ears, listens for stuff to do
    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("Rusty has successfully awoken!");
            }
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message handler failed");
                    }
                });
            }
            Event::InteractionCreate(interaction) => {
                if let Some(unclaimed) = waiters.dispatch(interaction.0) {
                    debug!(interaction_id = unclaimed.id.get(), "no chooser waiting on interaction");
                }
            }
            _ => {} // Ignore unused events
        }
    }
    Ok(()) // Return Success, shutdown cleanly
}
