use crate::document::document_impl::DocumentImpl;
use gosub_shared::document::DocumentHandle;
use gosub_shared::traits::document::DocumentBuilder;

/// This struct will be used to create a fully initialized document
pub struct DocumentBuilderImpl {}

impl DocumentBuilder for DocumentBuilderImpl {
    type Document = DocumentImpl;

    /// Creates a new document with a document root node and a body element
    fn new_document() -> DocumentHandle<DocumentImpl> {
        DocumentHandle::create(DocumentImpl::new())
    }
}
