//! API module for Vigil
//!
//! A thin HTTP boundary over the scoring engine: it decodes requests, calls
//! the engine and, when asked, records the prediction.

pub mod handlers;
pub mod routes;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::error::VigilError;
use crate::ews::{PopulationAggregator, PredictionRecorder};

pub use routes::configure;

/// Shared application state
pub struct AppState {
    pub aggregator: PopulationAggregator,
    pub recorder: Arc<dyn PredictionRecorder>,
}

impl ResponseError for VigilError {
    fn status_code(&self) -> StatusCode {
        match self {
            VigilError::PatientNotFound(_) => StatusCode::NOT_FOUND,
            VigilError::MissingIdentifier(_) => StatusCode::BAD_REQUEST,
            VigilError::Recorder(_) => StatusCode::SERVICE_UNAVAILABLE,
            VigilError::Config(_) | VigilError::InvalidThresholds { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
