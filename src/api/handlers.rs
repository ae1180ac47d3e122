use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use crate::error::VigilError;
use crate::ews::{DashboardQuery, PredictionRecord};
use crate::models::{AdmittedPatient, VitalsInput};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub patient_id: Option<String>,
    pub admission_id: Option<String>,
    #[serde(default)]
    pub vitals: VitalsInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    #[serde(flatten)]
    pub query: DashboardQuery,
    #[serde(default)]
    pub patients: Vec<AdmittedPatient>,
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Score one observation. When the request names the patient and admission
/// the result is also written to the prediction log.
pub async fn score(
    state: web::Data<AppState>,
    body: web::Json<ScoreRequest>,
) -> Result<HttpResponse, VigilError> {
    let request = body.into_inner();
    let result = state.aggregator.engine().assess(&request.vitals);

    if let (Some(patient_id), Some(admission_id)) = (request.patient_id, request.admission_id) {
        let record = PredictionRecord::new(patient_id, admission_id, &result, Utc::now());
        state.recorder.record(record)?;
    }

    Ok(HttpResponse::Ok().json(result))
}

pub async fn dashboard(
    state: web::Data<AppState>,
    body: web::Json<DashboardRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    let view = state.aggregator.aggregate(&request.patients, Utc::now(), &request.query);
    if view.summary.vitals_overdue > 0 {
        warn!(overdue = view.summary.vitals_overdue, "patients with overdue vitals");
    }
    HttpResponse::Ok().json(view)
}

pub async fn predictions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, VigilError> {
    let patient_id = path.into_inner();
    let history = state.recorder.history(&patient_id);
    if history.is_empty() {
        return Err(VigilError::PatientNotFound(patient_id));
    }
    info!(patient_id = %patient_id, records = history.len(), "prediction history served");
    Ok(HttpResponse::Ok().json(history))
}
