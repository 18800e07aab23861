use crate::app_context::AppContext;
use crate::geodesy::errors::ConvertError;
use crate::geodesy::projection::{is_valid_wgs84, to_sweref99};
use crate::positions::models::Position;
use crate::positions::normalize::normalize;
use crate::positions::requests::{CheckAnswerRequest, SavePositionRequest};
use crate::positions::responses::{ApiError, CheckAnswerResponse, QuizPositionResponse};
use crate::storage::interface::PositionRepo;
use crate::storage::positions::HashMapPositionsStorage;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

/// Serves one random position as a quiz task, with its coordinates given in
/// both WGS 84 and SWEREF 99 TM and the name withheld.
#[axum::debug_handler]
pub async fn quiz(
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
) -> Result<Json<QuizPositionResponse>, ApiError> {
    let position = app_context
        .positions
        .random()
        .await
        .ok_or(ApiError::NoPositionsStored)?;
    let sweref99_coordinates = to_sweref99(position.coordinates)?;
    Ok(Json(QuizPositionResponse {
        id: position.id,
        wgs84_coordinates: position.coordinates,
        sweref99_coordinates,
        address: position.address,
    }))
}

#[axum::debug_handler]
pub async fn all(
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
) -> Json<Vec<Position>> {
    Json(app_context.positions.all().await)
}

#[axum::debug_handler]
pub async fn by_id(
    Path(id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
) -> Result<Json<Position>, ApiError> {
    let position = app_context
        .positions
        .get(id)
        .await
        .ok_or(ApiError::PositionNotFound)?;
    Ok(Json(position))
}

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
    Json(request): Json<SavePositionRequest>,
) -> Result<(StatusCode, Json<Position>), ApiError> {
    reject_invalid_coordinates(&request)?;
    let position = Position {
        id: Uuid::new_v4(),
        name: request.name,
        coordinates: request.coordinates,
        address: request.address,
    };
    app_context.positions.create(position.clone()).await;
    Ok((StatusCode::CREATED, Json(position)))
}

#[axum::debug_handler]
pub async fn update(
    Path(id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
    Json(request): Json<SavePositionRequest>,
) -> Result<Json<Position>, ApiError> {
    reject_invalid_coordinates(&request)?;
    let position = Position {
        id,
        name: request.name,
        coordinates: request.coordinates,
        address: request.address,
    };
    let updated = app_context
        .positions
        .update(id, position)
        .await
        .ok_or(ApiError::PositionNotFound)?;
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete(
    Path(id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
) -> Result<StatusCode, ApiError> {
    if app_context.positions.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::PositionNotFound)
    }
}

/// Compares a free-text name guess against the stored name of a position,
/// ignoring case, diacritics and stray whitespace.
// `axum::debug_handler` expands to an internal helper named `check`, which
// collides with this handler's name, so the diagnostic attribute is omitted.
pub async fn check(
    State(app_context): State<AppContext<HashMapPositionsStorage>>,
    Json(request): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>, ApiError> {
    let position = app_context
        .positions
        .get(request.id)
        .await
        .ok_or(ApiError::PositionNotFound)?;
    let correct = normalize(&request.name) == normalize(&position.name);
    Ok(Json(CheckAnswerResponse { correct }))
}

fn reject_invalid_coordinates(request: &SavePositionRequest) -> Result<(), ApiError> {
    if is_valid_wgs84(request.coordinates) {
        Ok(())
    } else {
        Err(ApiError::Convert(ConvertError::InvalidInput {
            lat: request.coordinates.lat,
            lon: request.coordinates.lon,
        }))
    }
}
