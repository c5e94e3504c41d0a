use crate::document::document_impl::{DocumentImpl, TreeIterator};
use crate::errors::Error;
use gosub_shared::node::NodeId;

#[derive(Debug, PartialEq, Eq)]
pub enum Condition {
    EqualsTag(String),
    ContainsClass(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchType {
    Uninitialized,
    FindFirst,
    FindAll,
}

pub struct Query {
    pub(crate) conditions: Vec<Condition>,
    pub(crate) search_type: SearchType,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            search_type: SearchType::Uninitialized,
        }
    }

    #[must_use]
    pub fn equals_tag(mut self, tag_name: &str) -> Self {
        self.conditions.push(Condition::EqualsTag(tag_name.to_owned()));
        self
    }

    #[must_use]
    pub fn contains_class(mut self, class: &str) -> Self {
        self.conditions.push(Condition::ContainsClass(class.to_owned()));
        self
    }

    #[must_use]
    pub fn find_first(mut self) -> Self {
        self.search_type = SearchType::FindFirst;
        self
    }

    #[must_use]
    pub fn find_all(mut self) -> Self {
        self.search_type = SearchType::FindAll;
        self
    }
}

pub struct DocumentQuery;

impl DocumentQuery {
    /// Perform a single query against the subtree below `root` (the root itself is not matched).
    /// If query search type is uninitialized, returns an error.
    /// Otherwise, returns a vector of NodeIds that match the predicate in tree order (preorder depth-first.)
    pub fn query(document: &DocumentImpl, root: NodeId, query: &Query) -> Result<Vec<NodeId>, Error> {
        if query.search_type == SearchType::Uninitialized {
            return Err(Error::Query("Query predicate is uninitialized".to_owned()));
        }

        let mut found_ids = Vec::new();
        for current_node_id in TreeIterator::from_node(document, root).skip(1) {
            let predicate_result = query
                .conditions
                .iter()
                .all(|condition| Self::matches_query_condition(document, current_node_id, condition));

            if predicate_result {
                found_ids.push(current_node_id);
                if query.search_type == SearchType::FindFirst {
                    return Ok(found_ids);
                }
            }
        }

        Ok(found_ids)
    }

    fn matches_query_condition(document: &DocumentImpl, current_node_id: NodeId, condition: &Condition) -> bool {
        let Some(current_node_data) = document
            .arena
            .node_ref(current_node_id)
            .and_then(|node| node.get_element_data())
        else {
            return false;
        };

        match condition {
            Condition::EqualsTag(tag) => current_node_data.name() == *tag,
            Condition::ContainsClass(class_name) => current_node_data.classlist().contains(class_name),
        }
    }
}
