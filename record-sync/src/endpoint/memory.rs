//! In-Memory Endpoint
//!
//! Honours the list contract (search, sort, 1-based pages) over a `Vec`.
//! Records every call it receives and can be told to fail the next call of
//! a given operation, which makes it the test double for the controller.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::domain::{
    Entity, Record, RecordDraft, RecordId, SearchColumn, SortField, SortOrder, SyncError,
    SyncResult, ViewState,
};
use super::query::ListPage;
use super::traits::RecordEndpoint;

/// Endpoint operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// A request as the endpoint received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointCall {
    List(ViewState),
    Create(RecordDraft),
    Update(RecordId, RecordDraft),
    Delete(RecordId),
}

impl EndpointCall {
    pub fn operation(&self) -> Operation {
        match self {
            EndpointCall::List(_) => Operation::List,
            EndpointCall::Create(_) => Operation::Create,
            EndpointCall::Update(..) => Operation::Update,
            EndpointCall::Delete(_) => Operation::Delete,
        }
    }
}

#[derive(Default)]
struct MemoryState {
    records: Vec<Record>,
    next_id: RecordId,
    calls: Vec<EndpointCall>,
    failures: HashMap<Operation, VecDeque<SyncError>>,
}

/// Record collection held in memory
#[derive(Default)]
pub struct InMemoryEndpoint {
    state: RefCell<MemoryState>,
}

impl InMemoryEndpoint {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seed the collection; new ids continue after the highest seeded id
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            state: RefCell::new(MemoryState {
                records,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Current contents, in insertion order
    pub fn records(&self) -> Vec<Record> {
        self.state.borrow().records.clone()
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<EndpointCall> {
        self.state.borrow().calls.clone()
    }

    /// Calls of one operation kind
    pub fn calls_of(&self, operation: Operation) -> Vec<EndpointCall> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .cloned()
            .collect()
    }

    /// Make the next call of `operation` fail with `error`
    pub fn fail_next(&self, operation: Operation, error: SyncError) {
        self.state
            .borrow_mut()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    fn begin(&self, call: EndpointCall) -> SyncResult<()> {
        let mut state = self.state.borrow_mut();
        let operation = call.operation();
        state.calls.push(call);
        match state.failures.get_mut(&operation).and_then(VecDeque::pop_front) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn position(state: &MemoryState, id: RecordId) -> SyncResult<usize> {
        state
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| SyncError::status(404, format!("Record {} not found", id)))
    }
}

fn column_text(record: &Record, column: SearchColumn) -> String {
    match column {
        SearchColumn::Id => record.id.to_string(),
        SearchColumn::Name => record.name.clone(),
        SearchColumn::StartDate => record.start_date_text(),
    }
}

fn matches(record: &Record, needle: &str, column: Option<SearchColumn>) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |c: SearchColumn| column_text(record, c).to_lowercase().contains(needle);
    match column {
        Some(c) => hit(c),
        None => SearchColumn::ALL.into_iter().any(hit),
    }
}

fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Reviews => a.reviews.cmp(&b.reviews),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
    }
}

#[async_trait(?Send)]
impl RecordEndpoint for InMemoryEndpoint {
    async fn list(&self, view: &ViewState) -> SyncResult<ListPage> {
        self.begin(EndpointCall::List(view.clone()))?;
        let state = self.state.borrow();

        let needle = view.search.trim().to_lowercase();
        let mut hits: Vec<&Record> = state
            .records
            .iter()
            .filter(|r| matches(r, &needle, view.search_column))
            .collect();

        if let Some(sort) = view.sort {
            hits.sort_by(|a, b| {
                let ord = compare(a, b, sort.field);
                match sort.order {
                    SortOrder::Ascend => ord,
                    SortOrder::Descend => ord.reverse(),
                }
            });
        }

        let size = view.page_size.max(1) as usize;
        let skip = (view.page.max(1) as usize - 1).saturating_mul(size);
        Ok(ListPage {
            total: hits.len() as u64,
            data: hits.into_iter().skip(skip).take(size).cloned().collect(),
        })
    }

    async fn create(&self, draft: &RecordDraft) -> SyncResult<()> {
        self.begin(EndpointCall::Create(draft.clone()))?;
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.records.push(Record::from_draft(id, draft.clone()));
        Ok(())
    }

    async fn update(&self, id: RecordId, draft: &RecordDraft) -> SyncResult<()> {
        self.begin(EndpointCall::Update(id, draft.clone()))?;
        let mut state = self.state.borrow_mut();
        let index = Self::position(&state, id)?;
        state.records[index] = Record::from_draft(id, draft.clone());
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> SyncResult<()> {
        self.begin(EndpointCall::Delete(id))?;
        let mut state = self.state.borrow_mut();
        let index = Self::position(&state, id)?;
        state.records.remove(index);
        Ok(())
    }
}
