//! `GET /api/patients/:patient_id/profile` — patient profile page.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::router::ViewerContext;
use crate::loader::{self, PageLoader};
use crate::source::RecordSource;
use crate::view::ProfilePage;

/// Runs one profile load cycle and returns the rendered page.
pub async fn patient_profile<S: RecordSource + 'static>(
    State(ctx): State<ViewerContext<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProfilePage>, ApiError> {
    let candidates = [raw_id];
    let patient_id = loader::select_patient_id(&candidates)
        .ok_or_else(|| ApiError::BadRequest("missing patient identifier".into()))?;

    let page_loader = PageLoader::new(Arc::clone(&ctx.source));
    page_loader.load_profile(Some(patient_id)).await;

    Ok(Json(ProfilePage::render(&page_loader.snapshot())))
}
