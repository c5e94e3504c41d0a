use crate::event::{Event, EventKind};
use crate::node::NodeId;
use crate::traits::document::Document;
use crate::types::{Error, Result};
use std::cell::{BorrowMutError, Ref, RefCell, RefMut};
use std::fmt::Debug;
use std::rc::{Rc, Weak};

pub struct DocumentHandle<D: Document>(pub Rc<RefCell<D>>);

impl<D: Document> DocumentHandle<D> {
    /// Create a new DocumentHandle from a document
    pub fn create(document: D) -> Self {
        DocumentHandle(Rc::new(RefCell::new(document)))
    }

    /// Returns the document as referenced by the handle
    pub fn get(&self) -> Ref<'_, D> {
        self.0.borrow()
    }

    /// Returns the document as a mutable reference
    pub fn get_mut(&mut self) -> RefMut<'_, D> {
        self.0.borrow_mut()
    }

    /// Returns a mutable reference when the document is not borrowed elsewhere. Used in places
    /// (like drop handlers) that may run while a listener is being dispatched.
    pub fn try_get_mut(&mut self) -> std::result::Result<RefMut<'_, D>, BorrowMutError> {
        self.0.try_borrow_mut()
    }

    /// Returns a weak handle that does not keep the document alive
    pub fn downgrade(&self) -> WeakDocumentHandle<D> {
        WeakDocumentHandle(Rc::downgrade(&self.0))
    }

    /// Dispatches an event of the given kind on the target element and returns the number of
    /// listeners that were called. Listeners are collected first and then called without any
    /// borrow on the document, so they are free to mutate it.
    pub fn dispatch_event(&self, target: NodeId, kind: EventKind) -> Result<usize> {
        let listeners = {
            let doc = self.0.try_borrow().map_err(|_| Error::DocumentBorrowed)?;
            if !doc.contains_node(target) {
                return Err(Error::NodeNotFound(target).into());
            }
            doc.event_listeners(target, kind)
        };

        log::trace!("dispatching {kind:?} on {target} to {} listener(s)", listeners.len());
        let event = Event { kind, target };
        for listener in &listeners {
            listener(&event);
        }

        Ok(listeners.len())
    }
}

impl<D: Document + Debug> Debug for DocumentHandle<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.borrow())
    }
}

impl<D: Document + PartialEq> PartialEq for DocumentHandle<D> {
    fn eq(&self, other: &Self) -> bool {
        self.0.borrow().eq(&other.0.borrow())
    }
}

// NOTE: cloning a handle clones the reference, not the document.
impl<D: Document> Clone for DocumentHandle<D> {
    fn clone(&self) -> DocumentHandle<D> {
        DocumentHandle(Rc::clone(&self.0))
    }
}

/// Non-owning handle to a document. Event listeners stored inside a document must use this one,
/// otherwise the document would keep itself alive.
pub struct WeakDocumentHandle<D: Document>(Weak<RefCell<D>>);

impl<D: Document> WeakDocumentHandle<D> {
    /// Returns a strong handle, or None when the document has been dropped
    pub fn upgrade(&self) -> Option<DocumentHandle<D>> {
        self.0.upgrade().map(DocumentHandle)
    }
}

impl<D: Document> Clone for WeakDocumentHandle<D> {
    fn clone(&self) -> Self {
        WeakDocumentHandle(Weak::clone(&self.0))
    }
}
