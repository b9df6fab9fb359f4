//! The seam between the chooser state machine and the chat platform.

use async_trait::async_trait;
use tracing::error;

use crate::controls::ControlSet;
use crate::event::EventPayload;

/// How the next page gets onto the screen.
#[derive(Debug)]
pub enum Renderer<E> {
    /// Send a brand-new message (first render of a session).
    Fresh,
    /// Replace the content of the message `E` was triggered from.
    InPlace(E),
    /// Leave the message alone and answer `E` with a private hint.
    Hint(E),
}

impl<E> Renderer<E> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::InPlace(_) => "in-place",
            Self::Hint(_) => "hint",
        }
    }
}

/// A platform that can draw chooser controls and hand back component events.
#[async_trait]
pub trait InteractionSurface: Send + Sync {
    /// Incoming component interaction.
    type Event: Send + Sync + 'static;
    /// Handle to a rendered message, used to scope event waits.
    type Message: Send + Sync + 'static;

    /// Draw `controls` under `text`, returning the message now showing them.
    ///
    /// For [`Renderer::Hint`] the surface only replies privately with `text`
    /// and returns the message the event came from.
    async fn render(
        &self,
        renderer: &Renderer<Self::Event>,
        text: &str,
        controls: &ControlSet,
    ) -> anyhow::Result<Self::Message>;

    /// Show a short notice visible only to the interacting user where the
    /// platform allows it.
    async fn notify(&self, renderer: &Renderer<Self::Event>, text: &str) -> anyhow::Result<()>;

    /// Wait for the next component event on `message`.
    ///
    /// Timeouts are the surface's business and come back as errors.
    async fn await_event(&self, message: &Self::Message) -> anyhow::Result<Self::Event>;

    /// Strip the interactive controls from a message that no longer listens.
    async fn clear_controls(&self, message: &Self::Message) -> anyhow::Result<()>;

    /// Extract the custom id and selected values from an event.
    fn payload<'a>(&self, event: &'a Self::Event) -> Option<EventPayload<'a>>;

    /// Fault sink for failures that end a session without reaching the caller.
    fn report_fault(&self, control_id: &str, source: &anyhow::Error) {
        error!(?source, control_id, "chooser session failed");
    }
}
