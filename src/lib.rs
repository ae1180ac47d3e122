//! Vigil early-warning core library
//!
//! This module exports the inpatient deterioration scoring engine: vitals
//! normalization, NEWS2 composite scoring, risk classification, trend
//! analysis and the ward monitoring dashboard aggregate.

pub mod api;
pub mod config;
pub mod error;
pub mod ews;
pub mod models;
pub mod telemetry;

pub use error::{Result, VigilError};
