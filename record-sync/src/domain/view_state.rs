//! View State
//!
//! Pagination, search and sort parameters behind the next list query.
//! Mutations return the next state instead of changing it in place.

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Column a search text is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchColumn {
    Id,
    Name,
    StartDate,
}

impl SearchColumn {
    pub const ALL: [SearchColumn; 3] = [SearchColumn::Id, SearchColumn::Name, SearchColumn::StartDate];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchColumn::Id => "id",
            SearchColumn::Name => "name",
            SearchColumn::StartDate => "start_date",
        }
    }

    /// Unknown or empty values mean "no column"
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SearchColumn::Id),
            "name" => Some(SearchColumn::Name),
            "start_date" => Some(SearchColumn::StartDate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchColumn::Id => "ID",
            SearchColumn::Name => "Name",
            SearchColumn::StartDate => "Start Date",
        }
    }
}

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Reviews,
    StartDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Reviews => "reviews",
            SortField::StartDate => "start_date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "reviews" => Some(SortField::Reviews),
            "start_date" => Some(SortField::StartDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "ascend",
            SortOrder::Descend => "descend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ascend" => Some(SortOrder::Ascend),
            "descend" => Some(SortOrder::Descend),
            _ => None,
        }
    }
}

/// Active sort: one field, one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Sort after clicking the header of `field`.
    ///
    /// Clicking cycles ascend, descend, unsorted. Clicking a different
    /// column starts at ascend.
    pub fn toggled(current: Option<Sort>, field: SortField) -> Option<Sort> {
        match current {
            Some(Sort { field: f, order: SortOrder::Ascend }) if f == field => {
                Some(Sort::new(field, SortOrder::Descend))
            }
            Some(Sort { field: f, order: SortOrder::Descend }) if f == field => None,
            _ => Some(Sort::new(field, SortOrder::Ascend)),
        }
    }

    /// Direction shown on `field`'s header, if it is the sorted column
    pub fn order_for(current: Option<Sort>, field: SortField) -> Option<SortOrder> {
        current.filter(|s| s.field == field).map(|s| s.order)
    }
}

/// Client-local parameters of the list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub search_column: Option<SearchColumn>,
    pub sort: Option<Sort>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            search_column: None,
            sort: Some(Sort::new(SortField::Id, SortOrder::Ascend)),
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Default::default()
        }
    }

    /// New search text; back to the first page
    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: text.into(),
            ..self.clone()
        }
    }

    /// New search column; back to the first page
    pub fn with_search_column(&self, column: Option<SearchColumn>) -> Self {
        Self {
            page: 1,
            search_column: column,
            ..self.clone()
        }
    }

    /// No search text, no column, first page
    pub fn cleared_search(&self) -> Self {
        Self {
            page: 1,
            search: String::new(),
            search_column: None,
            ..self.clone()
        }
    }

    /// Pagination or sort changed from the table
    pub fn with_view(&self, page: u32, page_size: u32, sort: Option<Sort>) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            sort,
            ..self.clone()
        }
    }

    /// `standard` sizes plus the current one when it is not among them, ascending
    pub fn page_size_choices(&self, standard: &[u32]) -> Vec<u32> {
        let mut choices = standard.to_vec();
        if !choices.contains(&self.page_size) {
            choices.push(self.page_size);
        }
        choices.sort_unstable();
        choices
    }

    /// Number of pages needed for `total` rows (at least one)
    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.max(1));
        (total.div_ceil(size)).max(1).min(u64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_changes_reset_page() {
        let state = ViewState::default().with_view(4, 20, None);
        assert_eq!(state.page, 4);

        let searched = state.with_search("pier");
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "pier");
        assert_eq!(searched.page_size, 20);

        let scoped = state.with_search_column(Some(SearchColumn::Name));
        assert_eq!(scoped.page, 1);
        assert_eq!(scoped.search_column, Some(SearchColumn::Name));
    }

    #[test]
    fn test_cleared_search() {
        let state = ViewState::default()
            .with_search("x")
            .with_search_column(Some(SearchColumn::Id))
            .with_view(3, 10, None);
        let cleared = state.cleared_search();
        assert_eq!(cleared.page, 1);
        assert!(cleared.search.is_empty());
        assert_eq!(cleared.search_column, None);
        assert_eq!(cleared.sort, None);
    }

    #[test]
    fn test_with_view_clamps_to_one() {
        let state = ViewState::default().with_view(0, 0, None);
        assert_eq!((state.page, state.page_size), (1, 1));
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let asc = Sort::toggled(None, SortField::Name);
        assert_eq!(asc, Some(Sort::new(SortField::Name, SortOrder::Ascend)));
        let desc = Sort::toggled(asc, SortField::Name);
        assert_eq!(desc, Some(Sort::new(SortField::Name, SortOrder::Descend)));
        assert_eq!(Sort::toggled(desc, SortField::Name), None);
        assert_eq!(
            Sort::toggled(desc, SortField::Reviews),
            Some(Sort::new(SortField::Reviews, SortOrder::Ascend))
        );
        assert_eq!(Sort::order_for(desc, SortField::Name), Some(SortOrder::Descend));
        assert_eq!(Sort::order_for(desc, SortField::Id), None);
    }

    #[test]
    fn test_page_size_choices_include_current() {
        let standard = [10, 20, 50, 100];
        assert_eq!(ViewState::default().page_size_choices(&standard), vec![10, 20, 50, 100]);
        assert_eq!(ViewState::with_page_size(25).page_size_choices(&standard), vec![10, 20, 25, 50, 100]);
        assert_eq!(ViewState::with_page_size(500).page_size_choices(&standard), vec![10, 20, 50, 100, 500]);
    }

    #[test]
    fn test_page_count() {
        let state = ViewState::default();
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);
    }

    #[test]
    fn test_column_names() {
        for column in SearchColumn::ALL {
            assert_eq!(SearchColumn::parse(column.as_str()), Some(column));
        }
        assert_eq!(SearchColumn::parse(""), None);
        assert_eq!(SortField::parse("start_date"), Some(SortField::StartDate));
        assert_eq!(SortOrder::parse("descend"), Some(SortOrder::Descend));
    }
}
