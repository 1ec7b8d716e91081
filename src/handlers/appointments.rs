use axum::Json;
use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::BookingRequest;

// POST /appointments
//
// Accepts any submission whose five fields are present. Nothing is stored
// and the doctor is not looked up, so the acknowledgement is static; two
// submissions for the same doctor/date/time both succeed.
pub async fn submit_booking(Json(body): Json<Value>) -> Result<Json<Value>, AppError> {
    let Some(request) = BookingRequest::from_value(&body) else {
        tracing::warn!("rejected appointment submission with missing fields");
        return Err(AppError::MissingFields);
    };

    if NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").is_err() {
        tracing::warn!(date = %request.date, "appointment date is not a calendar date");
    }

    tracing::info!(
        doctor_id = %request.doctor_id,
        date = %request.date,
        time = %request.time,
        "appointment accepted"
    );

    Ok(Json(serde_json::json!({
        "message": "Appointment booked successfully!"
    })))
}
