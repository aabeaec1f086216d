//! List query parameters and response body

use serde::{Deserialize, Serialize};

use crate::domain::{Record, ViewState};

/// Body of a successful list call: `{ data, total }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    pub data: Vec<Record>,
    /// Matching rows across all pages
    pub total: u64,
}

/// Query string pairs for `GET /data`.
///
/// `search` and `searchColumn` are always present (empty when unset);
/// `sortField` and `sortOrder` only while a sort is active.
pub fn list_query_pairs(view: &ViewState) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("page", view.page.to_string()),
        ("pageSize", view.page_size.to_string()),
        ("search", view.search.clone()),
        ("searchColumn", view.search_column.map(|c| c.as_str()).unwrap_or_default().to_string()),
    ];
    if let Some(sort) = view.sort {
        pairs.push(("sortField", sort.field.as_str().to_string()));
        pairs.push(("sortOrder", sort.order.as_str().to_string()));
    }
    pairs
}
