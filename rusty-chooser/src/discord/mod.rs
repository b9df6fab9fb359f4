//! Discord implementation of [`InteractionSurface`] on top of twilight.

mod components;
#[cfg(test)]
mod fixtures;
mod parse;
pub mod respond;
mod waiters;

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    application::interaction::{Interaction, InteractionData},
    channel::{Message, message::component::Component},
    id::{
        Id,
        marker::{ApplicationMarker, ChannelMarker, MessageMarker},
    },
};

pub use components::build_components;
pub use parse::parse_emoji;
pub use waiters::{ComponentWait, ComponentWaiters};

use crate::controls::ControlSet;
use crate::event::EventPayload;
use crate::surface::{InteractionSurface, Renderer};
use respond::{respond_ephemeral_message, respond_update_message};

/// Default time a chooser page waits for a component interaction.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where a chooser's first message goes.
#[derive(Clone, Debug)]
pub enum Origin {
    /// Post a new message in a channel (message commands).
    Channel(Id<ChannelMarker>),
    /// Edit the original response of an application command.
    Interaction {
        application_id: Id<ApplicationMarker>,
        token: String,
    },
}

/// Message a chooser page currently lives on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderedMessage {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

impl From<&Message> for RenderedMessage {
    fn from(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id,
            message_id: message.id,
        }
    }
}

/// Renders choosers through the HTTP client and receives their component
/// interactions from the gateway via [`ComponentWaiters`].
///
/// The bot's event loop must dispatch every `InteractionCreate` into the same
/// waiters, otherwise waits only ever end by timeout.
pub struct DiscordSurface {
    http: Arc<Client>,
    waiters: ComponentWaiters,
    origin: Origin,
    timeout: Duration,
}

impl DiscordSurface {
    pub fn new(http: Arc<Client>, waiters: ComponentWaiters, origin: Origin) -> Self {
        Self {
            http,
            waiters,
            origin,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl InteractionSurface for DiscordSurface {
    type Event = Interaction;
    type Message = RenderedMessage;

    async fn render(
        &self,
        renderer: &Renderer<Interaction>,
        text: &str,
        controls: &ControlSet,
    ) -> anyhow::Result<RenderedMessage> {
        match renderer {
            Renderer::Fresh => {
                let components = build_components(controls);
                let message = match &self.origin {
                    Origin::Channel(channel_id) => {
                        self.http
                            .create_message(*channel_id)
                            .content(text)
                            .components(&components)
                            .await?
                            .model()
                            .await?
                    }
                    Origin::Interaction {
                        application_id,
                        token,
                    } => {
                        self.http
                            .interaction(*application_id)
                            .update_response(token)
                            .content(Some(text))
                            .components(Some(&components))
                            .await?
                            .model()
                            .await?
                    }
                };

                Ok(RenderedMessage::from(&message))
            }
            Renderer::InPlace(interaction) => {
                let components = build_components(controls);
                respond_update_message(&self.http, interaction, text, &components).await?;
                source_message(interaction)
            }
            Renderer::Hint(interaction) => {
                respond_ephemeral_message(&self.http, interaction, text).await?;
                source_message(interaction)
            }
        }
    }

    async fn notify(&self, renderer: &Renderer<Interaction>, text: &str) -> anyhow::Result<()> {
        match (renderer, &self.origin) {
            (Renderer::Fresh, Origin::Channel(channel_id)) => {
                self.http.create_message(*channel_id).content(text).await?;
            }
            (
                Renderer::Fresh,
                Origin::Interaction {
                    application_id,
                    token,
                },
            ) => {
                let empty_components: [Component; 0] = [];
                self.http
                    .interaction(*application_id)
                    .update_response(token)
                    .content(Some(text))
                    .components(Some(&empty_components))
                    .await?;
            }
            (Renderer::InPlace(interaction) | Renderer::Hint(interaction), _) => {
                respond_ephemeral_message(&self.http, interaction, text).await?;
            }
        }

        Ok(())
    }

    async fn await_event(&self, message: &RenderedMessage) -> anyhow::Result<Interaction> {
        self.waiters.wait_for(message.message_id, self.timeout).await
    }

    async fn clear_controls(&self, message: &RenderedMessage) -> anyhow::Result<()> {
        let empty_components: [Component; 0] = [];
        self.http
            .update_message(message.channel_id, message.message_id)
            .components(Some(&empty_components))
            .await?;

        Ok(())
    }

    fn payload<'a>(&self, event: &'a Interaction) -> Option<EventPayload<'a>> {
        component_payload(event)
    }
}

fn component_payload(interaction: &Interaction) -> Option<EventPayload<'_>> {
    let Some(InteractionData::MessageComponent(data)) = interaction.data.as_ref() else {
        return None;
    };

    Some(EventPayload {
        custom_id: &data.custom_id,
        values: &data.values,
    })
}

fn source_message(interaction: &Interaction) -> anyhow::Result<RenderedMessage> {
    interaction
        .message
        .as_ref()
        .map(RenderedMessage::from)
        .ok_or_else(|| anyhow!("component interaction {} has no message", interaction.id))
}
