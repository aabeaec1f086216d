//! Controller Commands
//!
//! Fire-and-forget wrappers that run controller operations on the event
//! loop. The controller already reports failures as toasts, so results are
//! only used where the caller has a follow-up.

use leptos::task::spawn_local;
use record_sync::BulkDeleteReport;

use crate::context::AppContext;
use crate::models::{Record, RecordForm, RecordId, SearchColumn, Sort};

pub fn fetch(ctx: AppContext) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.fetch().await;
    });
}

pub fn set_search(ctx: AppContext, text: String) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.set_search(text).await;
    });
}

pub fn set_search_column(ctx: AppContext, column: Option<SearchColumn>) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.set_search_column(column).await;
    });
}

pub fn clear_search(ctx: AppContext) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.clear_search().await;
    });
}

/// Page, page size or sort changed in the table
pub fn change_view(ctx: AppContext, page: u32, page_size: u32, sort: Option<Sort>) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.on_view_change(page, page_size, sort).await;
    });
}

pub fn delete(ctx: AppContext, id: RecordId) {
    let controller = ctx.controller();
    spawn_local(async move {
        let _ = controller.delete(id).await;
    });
}

pub fn delete_many(ctx: AppContext, ids: Vec<RecordId>, on_done: impl FnOnce(BulkDeleteReport) + 'static) {
    let controller = ctx.controller();
    spawn_local(async move {
        let report = controller.delete_many(&ids).await;
        on_done(report);
    });
}

/// Create or update; `on_done` learns whether the endpoint accepted it
pub fn save(ctx: AppContext, form: RecordForm, editing: Option<Record>, on_done: impl FnOnce(bool) + 'static) {
    let controller = ctx.controller();
    spawn_local(async move {
        let saved = controller.save(&form, editing.as_ref()).await.is_ok();
        on_done(saved);
    });
}
