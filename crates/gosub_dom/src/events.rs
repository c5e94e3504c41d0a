//! Registry of event listeners attached to the elements of a document
use gosub_shared::event::{EventKind, EventListener, ListenerId};
use gosub_shared::node::NodeId;
use std::collections::HashMap;
use std::fmt::Debug;

struct RegisteredListener {
    id: ListenerId,
    kind: EventKind,
    callback: EventListener,
}

#[derive(Default)]
pub struct EventListeners {
    /// Listeners per element, in registration order
    listeners: HashMap<NodeId, Vec<RegisteredListener>>,
    /// Last handed out listener id
    last_id: ListenerId,
}

impl EventListeners {
    pub(crate) fn add_listener(&mut self, node_id: NodeId, kind: EventKind, callback: EventListener) -> ListenerId {
        self.last_id = self.last_id.next();
        let id = self.last_id;

        self.listeners
            .entry(node_id)
            .or_default()
            .push(RegisteredListener { id, kind, callback });

        id
    }

    pub(crate) fn remove_listener(&mut self, node_id: NodeId, listener_id: ListenerId) -> bool {
        let Some(registered) = self.listeners.get_mut(&node_id) else {
            return false;
        };

        let before = registered.len();
        registered.retain(|listener| listener.id != listener_id);
        let removed = registered.len() != before;

        if registered.is_empty() {
            self.listeners.remove(&node_id);
        }

        removed
    }

    /// Drops all listeners of a node (used when the node itself is deleted)
    pub(crate) fn remove_node(&mut self, node_id: NodeId) {
        self.listeners.remove(&node_id);
    }

    pub(crate) fn listeners_for(&self, node_id: NodeId, kind: EventKind) -> Vec<EventListener> {
        self.listeners
            .get(&node_id)
            .map(|registered| {
                registered
                    .iter()
                    .filter(|listener| listener.kind == kind)
                    .map(|listener| listener.callback.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("nodes", &self.listeners.len())
            .field("listeners", &self.len())
            .finish()
    }
}
