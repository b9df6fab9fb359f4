//! Tracks control ids of choosers that are still waiting for input.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::error::ChooserError;

/// Set of control ids owned by live chooser sessions on one surface.
///
/// Cheap to clone; every clone shares the same set.
#[derive(Clone, Debug, Default)]
pub struct ControlIdRegistry {
    active: Arc<Mutex<HashSet<String>>>,
}

impl ControlIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `control_id` until the returned lease is dropped.
    pub fn claim(&self, control_id: &str) -> Result<ControlIdLease, ChooserError> {
        if !self.lock().insert(control_id.to_owned()) {
            return Err(ChooserError::ControlIdInUse(control_id.to_owned()));
        }

        Ok(ControlIdLease {
            registry: self.clone(),
            control_id: control_id.to_owned(),
        })
    }

    pub fn is_active(&self, control_id: &str) -> bool {
        self.lock().contains(control_id)
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases its control id on drop.
#[derive(Debug)]
pub struct ControlIdLease {
    registry: ControlIdRegistry,
    control_id: String,
}

impl ControlIdLease {
    pub fn control_id(&self) -> &str {
        &self.control_id
    }
}

impl Drop for ControlIdLease {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.control_id);
    }
}
