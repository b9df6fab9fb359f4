use std::sync::Arc;

use rusty_chooser::ControlIdRegistry;
use rusty_chooser::discord::ComponentWaiters;
use twilight_http::Client;

/// Environment-driven bot settings.
pub mod config;

pub use config::BotConfig;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Fed with every gateway interaction; chooser pages wait on it.
    pub waiters: ComponentWaiters,
    /// Control ids of choosers currently waiting for input.
    pub choosers: ControlIdRegistry,
    pub config: Arc<BotConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, waiters: ComponentWaiters, config: BotConfig) -> Self {
        Self {
            http,
            waiters,
            choosers: ControlIdRegistry::new(),
            config: Arc::new(config),
        }
    }
}
