//! Events that a document can deliver to listeners attached to its elements.
use crate::node::NodeId;
use derive_more::Display;
use std::rc::Rc;

/// Kind of event. Only activation (click/tap) is needed by the treeview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// An event as delivered to a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Element on which the event was dispatched
    pub target: NodeId,
}

/// Identifies a registered listener so it can be removed again
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub struct ListenerId(usize);

impl ListenerId {
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<usize> for ListenerId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Callback invoked for a dispatched event. Listeners are shared so they can be cloned out of
/// the document before being called, which leaves the document free to be mutated by them.
pub type EventListener = Rc<dyn Fn(&Event)>;
