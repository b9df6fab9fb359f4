//! Scripted in-memory surface used by the session tests.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use anyhow::anyhow;
use async_trait::async_trait;

use crate::controls::ControlSet;
use crate::event::EventPayload;
use crate::surface::{InteractionSurface, Renderer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeEvent {
    pub custom_id: String,
    pub values: Vec<String>,
}

impl FakeEvent {
    pub fn press(custom_id: &str) -> Self {
        Self {
            custom_id: custom_id.to_owned(),
            values: Vec::new(),
        }
    }

    pub fn select(custom_id: &str, value: &str) -> Self {
        Self {
            custom_id: custom_id.to_owned(),
            values: vec![value.to_owned()],
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderCall {
    pub kind: &'static str,
    pub text: String,
    pub controls: ControlSet,
}

#[derive(Default)]
struct Log {
    script: VecDeque<FakeEvent>,
    renders: Vec<RenderCall>,
    notices: Vec<String>,
    faults: Vec<String>,
    cleared: Vec<u64>,
    awaited: usize,
    fail_render_after: Option<usize>,
}

/// Replays queued events; an exhausted script behaves like a timeout.
#[derive(Default)]
pub struct ScriptedSurface {
    log: Mutex<Log>,
}

impl ScriptedSurface {
    pub fn new(events: impl IntoIterator<Item = FakeEvent>) -> Self {
        let surface = Self::default();
        surface.lock().script = events.into_iter().collect();
        surface
    }

    /// Make every render after the first `count` fail.
    pub fn fail_renders_after(self, count: usize) -> Self {
        self.lock().fail_render_after = Some(count);
        self
    }

    pub fn renders(&self) -> Vec<RenderCall> {
        self.lock().renders.clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.lock().notices.clone()
    }

    pub fn faults(&self) -> Vec<String> {
        self.lock().faults.clone()
    }

    pub fn cleared(&self) -> Vec<u64> {
        self.lock().cleared.clone()
    }

    pub fn awaited(&self) -> usize {
        self.lock().awaited
    }

    fn lock(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl InteractionSurface for ScriptedSurface {
    type Event = FakeEvent;
    type Message = u64;

    async fn render(
        &self,
        renderer: &Renderer<FakeEvent>,
        text: &str,
        controls: &ControlSet,
    ) -> anyhow::Result<u64> {
        let mut log = self.lock();
        if log
            .fail_render_after
            .is_some_and(|limit| log.renders.len() >= limit)
        {
            return Err(anyhow!("render rejected"));
        }

        log.renders.push(RenderCall {
            kind: renderer.kind(),
            text: text.to_owned(),
            controls: controls.clone(),
        });
        // Every render lands on the one message the session owns.
        Ok(1)
    }

    async fn notify(&self, _renderer: &Renderer<FakeEvent>, text: &str) -> anyhow::Result<()> {
        self.lock().notices.push(text.to_owned());
        Ok(())
    }

    async fn await_event(&self, _message: &u64) -> anyhow::Result<FakeEvent> {
        let mut log = self.lock();
        log.awaited += 1;
        log.script
            .pop_front()
            .ok_or_else(|| anyhow!("timed out waiting for a component"))
    }

    async fn clear_controls(&self, message: &u64) -> anyhow::Result<()> {
        self.lock().cleared.push(*message);
        Ok(())
    }

    fn payload<'a>(&self, event: &'a FakeEvent) -> Option<EventPayload<'a>> {
        Some(EventPayload {
            custom_id: &event.custom_id,
            values: &event.values,
        })
    }

    fn report_fault(&self, _control_id: &str, source: &anyhow::Error) {
        self.lock().faults.push(source.to_string());
    }
}
