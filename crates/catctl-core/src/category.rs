//! Category lookup over backend-provided lists.
//!
//! The backend serves categories either as a nested tree (`children`
//! populated) or as a flat list with `parentId` references. Lookup walks
//! the tree depth-first; subcategory listing falls back to flat filtering
//! when the tree carries no children for the node. Trees are assumed
//! acyclic; there is no caching.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Ids are kept as strings: the category service predates the rest of
    /// the backend and mixes numeric and slug ids.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Depth-first search for a category by id across a forest of nodes.
#[must_use]
pub fn find_in_tree<'a>(nodes: &'a [Category], id: &str) -> Option<&'a Category> {
    let wanted = id.trim();
    for node in nodes {
        if node.id.trim() == wanted {
            return Some(node);
        }
        if let Some(found) = find_in_tree(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Lists the direct subcategories of `parent_id`.
///
/// Prefers the node's own `children` when the tree search finds any;
/// otherwise flat-filters the list by `parentId` with trimmed string
/// comparison, which handles flat payloads and numeric-vs-string id drift.
#[must_use]
pub fn subcategories<'a>(nodes: &'a [Category], parent_id: &str) -> Vec<&'a Category> {
    if let Some(node) = find_in_tree(nodes, parent_id) {
        if !node.children.is_empty() {
            return node.children.iter().collect();
        }
    }
    let wanted = parent_id.trim();
    nodes
        .iter()
        .filter(|c| c.parent_id.as_deref().map(str::trim) == Some(wanted))
        .collect()
}
