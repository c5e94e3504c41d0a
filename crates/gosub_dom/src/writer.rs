use crate::document::document_impl::DocumentImpl;
use crate::node::node_impl::{NodeImpl, NodeType};
use crate::node::visitor::Visitor;
use gosub_shared::node::NodeId;

// Writer to convert a document to a string
pub struct DocumentWriter {
    /// The buffer to write to
    buffer: String,
}

impl DocumentWriter {
    pub fn write_from_node(node: NodeId, document: &DocumentImpl) -> String {
        let mut w = Self { buffer: String::new() };

        w.visit_node(node, document);
        w.buffer
    }

    pub fn visit_node(&mut self, id: NodeId, document: &DocumentImpl) {
        let Some(node) = document.arena.node_ref(id) else {
            return;
        };

        match node.type_of() {
            NodeType::DocumentNode => {
                self.document_enter(node);
                self.visit_children(node.children(), document);
                self.document_leave(node);
            }
            NodeType::TextNode => {
                self.text_enter(node);
                self.visit_children(node.children(), document);
                self.text_leave(node);
            }
            NodeType::ElementNode => {
                self.element_enter(node);
                self.visit_children(node.children(), document);
                self.element_leave(node);
            }
        }
    }

    pub fn visit_children(&mut self, children: &[NodeId], document: &DocumentImpl) {
        for child in children {
            self.visit_node(*child, document);
        }
    }

    fn push_escaped(&mut self, value: &str, quote: bool) {
        for c in value.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                '"' if quote => self.buffer.push_str("&quot;"),
                _ => self.buffer.push(c),
            }
        }
    }
}

impl Visitor for DocumentWriter {
    fn document_enter(&mut self, _node: &NodeImpl) {}

    fn document_leave(&mut self, _node: &NodeImpl) {}

    fn text_enter(&mut self, node: &NodeImpl) {
        if let Some(data) = node.get_text_data() {
            self.push_escaped(data.value(), false);
        }
    }

    fn text_leave(&mut self, _node: &NodeImpl) {}

    fn element_enter(&mut self, node: &NodeImpl) {
        if let Some(data) = node.get_element_data() {
            self.buffer.push('<');
            self.buffer.push_str(data.name());

            let classes = data.classlist().names();
            if !classes.is_empty() {
                self.buffer.push_str(" class=\"");
                self.push_escaped(&classes.join(" "), true);
                self.buffer.push('"');
            }

            self.buffer.push('>');
        }
    }

    fn element_leave(&mut self, node: &NodeImpl) {
        if let Some(data) = node.get_element_data() {
            self.buffer.push_str("</");
            self.buffer.push_str(data.name());
            self.buffer.push('>');
        }
    }
}
