//! Bulk Delete Mode
//!
//! The options offered by the bulk-delete selector. "Nothing selected" is
//! `Option::None` at the use site.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkDeleteMode {
    /// Remove every item
    All,
    /// Remove every completed item (labelled "Delete Selected" in the UI)
    CompletedOnly,
}

impl BulkDeleteMode {
    pub const ALL: [BulkDeleteMode; 2] = [BulkDeleteMode::All, BulkDeleteMode::CompletedOnly];

    /// Value used in the `<select>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkDeleteMode::All => "all",
            BulkDeleteMode::CompletedOnly => "selected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkDeleteMode::All => "Delete All",
            BulkDeleteMode::CompletedOnly => "Delete Selected",
        }
    }

    /// Parse a `<select>` value; anything unknown means no selection
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(BulkDeleteMode::All),
            "selected" => Some(BulkDeleteMode::CompletedOnly),
            _ => None,
        }
    }
}
