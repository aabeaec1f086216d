//! UI Components
//!
//! Leptos components for the admin table.

mod search_bar;
mod record_table;
mod pagination_bar;
mod selection_bar;
mod record_form_modal;
mod row_delete_button;
mod toast_stack;
mod log_panel;

pub use search_bar::SearchBar;
pub use record_table::RecordTable;
pub use pagination_bar::PaginationBar;
pub use selection_bar::SelectionBar;
pub use record_form_modal::RecordFormModal;
pub use row_delete_button::RowDeleteButton;
pub use toast_stack::ToastStack;
pub use log_panel::LogPanel;
