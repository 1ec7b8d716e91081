use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::models::Doctor;
use crate::state::AppState;

// GET /doctors
//
// The full catalog, unfiltered and unpaginated; the client filters in
// memory.
pub async fn list_doctors(State(state): State<Arc<AppState>>) -> Json<Vec<Doctor>> {
    Json(state.catalog.all().to_vec())
}
