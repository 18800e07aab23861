use crate::geodesy::errors::ConvertError;
use crate::geodesy::models::{Sweref99Coordinates, Wgs84Coordinates};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a quiz taker receives: the coordinates and address of a position,
/// with its name withheld so it can be guessed.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPositionResponse {
    pub id: Uuid,
    pub wgs84_coordinates: Wgs84Coordinates,
    pub sweref99_coordinates: Sweref99Coordinates,
    pub address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerResponse {
    pub correct: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a positions handler can fail with, mapped onto HTTP statuses.
#[derive(Debug)]
pub enum ApiError {
    PositionNotFound,
    NoPositionsStored,
    Convert(ConvertError),
}

impl From<ConvertError> for ApiError {
    fn from(error: ConvertError) -> Self {
        ApiError::Convert(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::PositionNotFound => {
                (StatusCode::NOT_FOUND, String::from("No such position."))
            }
            ApiError::NoPositionsStored => {
                (StatusCode::NOT_FOUND, String::from("No positions stored."))
            }
            // Bad coordinates in a request body are the client's fault; a
            // degenerate projection of an already stored coordinate is ours.
            ApiError::Convert(error @ ConvertError::InvalidInput { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
            }
            ApiError::Convert(error @ ConvertError::Degenerate { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
