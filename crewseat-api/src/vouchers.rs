use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use crewseat_catalog::{AircraftProfile, CATALOG};
use crewseat_core::models::{NewVoucher, VoucherAssignment};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightKeyRequest {
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckVoucherResponse {
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoucherRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub aircraft: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateVoucherResponse {
    pub success: bool,
    pub seats: Vec<String>,
}

/// Stored voucher as exposed to the crew portal
#[derive(Debug, Serialize, Deserialize)]
pub struct VoucherResponse {
    pub id: i64,
    pub crew_name: String,
    pub crew_id: String,
    pub flight_number: String,
    pub flight_date: String,
    pub aircraft_type: String,
    pub seat1: String,
    pub seat2: String,
    pub seat3: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetVoucherResponse {
    pub voucher: Option<VoucherResponse>,
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateSeatRequest {
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub seat_position: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateSeatResponse {
    pub success: bool,
    pub new_seat: String,
    pub all_seats: Vec<String>,
}

impl From<VoucherAssignment> for VoucherResponse {
    fn from(voucher: VoucherAssignment) -> Self {
        let [seat1, seat2, seat3] = voucher.seats.0.map(|seat| seat.to_string());
        Self {
            id: voucher.id,
            crew_name: voucher.crew_name,
            crew_id: voucher.crew_id,
            flight_number: voucher.flight_number,
            flight_date: voucher.flight_date,
            aircraft_type: voucher.aircraft_type,
            seat1,
            seat2,
            seat3,
            created_at: voucher.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/check", post(check_voucher))
        .route("/api/generate", post(generate_voucher))
        .route("/api/voucher", post(get_voucher))
        .route("/api/regenerate-seat", post(regenerate_seat))
        .route("/api/aircraft", get(list_aircraft))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/check
/// Whether a voucher was already issued for the flight and date
pub async fn check_voucher(
    State(state): State<AppState>,
    payload: Result<Json<FlightKeyRequest>, JsonRejection>,
) -> Result<Json<CheckVoucherResponse>, AppError> {
    let Json(req) = payload?;
    let exists = state.vouchers.check(&req.flight_number, &req.date).await?;
    Ok(Json(CheckVoucherResponse { exists }))
}

/// POST /api/generate
/// Issue a voucher with three random seats
pub async fn generate_voucher(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVoucherRequest>, JsonRejection>,
) -> Result<Json<GenerateVoucherResponse>, AppError> {
    let Json(req) = payload?;

    let voucher = NewVoucher {
        crew_name: req.name,
        crew_id: req.id,
        flight_number: req.flight_number,
        flight_date: req.date,
        aircraft_type: req.aircraft,
    };

    let assignment = state.vouchers.generate(&voucher).await?;

    Ok(Json(GenerateVoucherResponse {
        success: true,
        seats: assignment.seats.to_labels(),
    }))
}

/// POST /api/voucher
pub async fn get_voucher(
    State(state): State<AppState>,
    payload: Result<Json<FlightKeyRequest>, JsonRejection>,
) -> Result<Json<GetVoucherResponse>, AppError> {
    let Json(req) = payload?;
    let voucher = state.vouchers.get(&req.flight_number, &req.date).await?;

    Ok(Json(GetVoucherResponse {
        exists: voucher.is_some(),
        voucher: voucher.map(VoucherResponse::from),
    }))
}

/// POST /api/regenerate-seat
/// Replace one seat, keeping the other two
pub async fn regenerate_seat(
    State(state): State<AppState>,
    payload: Result<Json<RegenerateSeatRequest>, JsonRejection>,
) -> Result<Json<RegenerateSeatResponse>, AppError> {
    let Json(req) = payload?;

    let outcome = state
        .vouchers
        .regenerate_seat(&req.flight_number, &req.date, req.seat_position)
        .await?;

    Ok(Json(RegenerateSeatResponse {
        success: true,
        new_seat: outcome.new_seat.to_string(),
        all_seats: outcome.seats.to_labels(),
    }))
}

/// GET /api/aircraft
pub async fn list_aircraft() -> Json<&'static [AircraftProfile]> {
    Json(CATALOG)
}
