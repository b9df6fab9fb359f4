//! Per-message waiters for component interactions.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use anyhow::{Context as _, anyhow};
use tokio::sync::oneshot;
use twilight_model::{
    application::interaction::{Interaction, InteractionData},
    id::{Id, marker::MessageMarker},
};

#[derive(Default)]
struct Waiting {
    next_token: u64,
    senders: HashMap<Id<MessageMarker>, (u64, oneshot::Sender<Interaction>)>,
}

/// Component interactions routed to the chooser page waiting on their message.
///
/// Cheap to clone; the bot's event loop and every surface share one map.
/// An entry lives exactly as long as its [`ComponentWait`].
#[derive(Clone, Default)]
pub struct ComponentWaiters {
    inner: Arc<Mutex<Waiting>>,
}

impl ComponentWaiters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in the next component interaction on `message_id`.
    ///
    /// A newer wait on the same message replaces the older one.
    pub fn wait(&self, message_id: Id<MessageMarker>) -> ComponentWait {
        let (sender, receiver) = oneshot::channel();

        let mut waiting = self.lock();
        waiting.next_token = waiting.next_token.wrapping_add(1);
        let token = waiting.next_token;
        waiting.senders.insert(message_id, (token, sender));

        ComponentWait {
            waiters: self.clone(),
            message_id,
            token,
            receiver,
        }
    }

    /// Wait for one component interaction on `message_id`, giving up after `timeout`.
    pub async fn wait_for(
        &self,
        message_id: Id<MessageMarker>,
        timeout: Duration,
    ) -> anyhow::Result<Interaction> {
        let mut wait = self.wait(message_id);

        tokio::time::timeout(timeout, wait.recv())
            .await
            .with_context(|| {
                format!(
                    "no component interaction within {}ms on message {message_id}",
                    timeout.as_millis()
                )
            })?
    }

    /// Hand a gateway interaction to the page waiting on its message.
    ///
    /// Returns the interaction back when nobody is waiting for it.
    pub fn dispatch(&self, interaction: Interaction) -> Option<Interaction> {
        if !matches!(
            interaction.data,
            Some(InteractionData::MessageComponent(_))
        ) {
            return Some(interaction);
        }

        let Some(message_id) = interaction.message.as_ref().map(|message| message.id) else {
            return Some(interaction);
        };

        let Some((_, sender)) = self.lock().senders.remove(&message_id) else {
            return Some(interaction);
        };

        sender.send(interaction).err()
    }

    pub fn len(&self) -> usize {
        self.lock().senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Waiting> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A pending wait; dropping it unregisters the message.
pub struct ComponentWait {
    waiters: ComponentWaiters,
    message_id: Id<MessageMarker>,
    token: u64,
    receiver: oneshot::Receiver<Interaction>,
}

impl ComponentWait {
    pub async fn recv(&mut self) -> anyhow::Result<Interaction> {
        (&mut self.receiver)
            .await
            .map_err(|_| anyhow!("component wait on message {} was replaced", self.message_id))
    }
}

impl Drop for ComponentWait {
    fn drop(&mut self) {
        let mut waiting = self.waiters.lock();
        // Only remove our own entry, not a newer wait on the same message.
        if waiting
            .senders
            .get(&self.message_id)
            .is_some_and(|(token, _)| *token == self.token)
        {
            waiting.senders.remove(&self.message_id);
        }
    }
}
