//! Listeners and their per-member registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::event::ModelChangeEvent;

/// Receives change events.
///
/// Any `Fn(&ModelChangeEvent)` closure is a listener.
pub trait EventListener {
    fn handle_event(&self, event: &ModelChangeEvent);
}

impl<F> EventListener for F
where
    F: Fn(&ModelChangeEvent),
{
    fn handle_event(&self, event: &ModelChangeEvent) {
        self(event);
    }
}

/// A registered listener. Identity is the allocation, see [`Arc::ptr_eq`].
pub type SharedListener = Arc<dyn EventListener + Send + Sync>;

/// Wraps a closure into a [`SharedListener`].
pub fn listener<F>(function: F) -> SharedListener
where
    F: Fn(&ModelChangeEvent) + Send + Sync + 'static,
{
    Arc::new(function)
}

/// Listeners grouped by dispatch key.
#[derive(Default, Clone)]
pub(crate) struct ListenerRegistry {
    listeners: HashMap<String, Vec<SharedListener>>,
}

impl ListenerRegistry {
    /// Registers `listener` for `key` unless it is already registered there.
    pub(crate) fn add(&mut self, key: &str, listener: SharedListener) {
        let list = self.listeners.entry(key.to_string()).or_default();
        if !list.iter().any(|known| Arc::ptr_eq(known, &listener)) {
            list.push(listener);
        }
    }

    pub(crate) fn remove(&mut self, key: &str, listener: &SharedListener) {
        if let Some(list) = self.listeners.get_mut(key) {
            list.retain(|known| !Arc::ptr_eq(known, listener));
        }
    }

    /// A copy of the listeners for `key`, safe to iterate while the
    /// registry changes.
    pub(crate) fn snapshot(&self, key: &str) -> Vec<SharedListener> {
        self.listeners.get(key).cloned().unwrap_or_default()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.listeners.iter().map(|(key, list)| (key, list.len())))
            .finish()
    }
}
