//! `GET /api/patients/:patient_id/history` — medical history page.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Local;

use crate::api::error::ApiError;
use crate::api::router::ViewerContext;
use crate::loader::{self, PageLoader};
use crate::source::RecordSource;
use crate::view::HistoryPage;

/// Runs one history load cycle (three concurrent fetches) and returns the
/// rendered page: summary card plus derived visit entries, newest first.
pub async fn medical_history<S: RecordSource + 'static>(
    State(ctx): State<ViewerContext<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<HistoryPage>, ApiError> {
    let candidates = [raw_id];
    let patient_id = loader::select_patient_id(&candidates)
        .ok_or_else(|| ApiError::BadRequest("missing patient identifier".into()))?;

    let page_loader = PageLoader::new(Arc::clone(&ctx.source));
    page_loader.load_history(Some(patient_id)).await;

    let now = Local::now().naive_local();
    Ok(Json(HistoryPage::render(&page_loader.snapshot(), now)))
}
