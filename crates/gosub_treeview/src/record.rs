//! Flat input records from which the tree is built
use crate::errors::TreeViewError;
use serde::{Deserialize, Serialize};

/// Identifier of a record
pub type ItemId = i64;

/// Parent id of records that live at the top level of the tree
pub const ROOT_PARENT_ID: ItemId = 0;

/// A single item of the tree. Records are immutable input: the tree only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "itemId")]
    pub id: ItemId,
    #[serde(rename = "itemName")]
    pub name: String,
    #[serde(rename = "itemParentId")]
    pub parent_id: ItemId,
}

impl Record {
    pub fn new(id: ItemId, name: &str, parent_id: ItemId) -> Self {
        Self {
            id,
            name: name.to_owned(),
            parent_id,
        }
    }

    /// Returns true when the record lives at the top level
    pub fn is_top_level(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }
}

impl From<(ItemId, &str, ItemId)> for Record {
    fn from((id, name, parent_id): (ItemId, &str, ItemId)) -> Self {
        Self::new(id, name, parent_id)
    }
}

/// Loads records from a json array: `[{ "itemId": 1, "itemName": "A", "itemParentId": 0 }]`.
/// A json object with a `data` member holding the array is accepted as well.
pub fn load_records(json: &str) -> Result<Vec<Record>, TreeViewError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Input {
        List(Vec<Record>),
        Wrapped { data: Vec<Record> },
    }

    let records = match serde_json::from_str::<Input>(json)? {
        Input::List(records) | Input::Wrapped { data: records } => records,
    };

    log::debug!("loaded {} records", records.len());
    Ok(records)
}
