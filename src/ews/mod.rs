//! Early-warning scoring engine
//!
//! Raw vitals flow through normalization, scoring and classification; the
//! population aggregator combines those results with trend analysis for the
//! monitoring dashboard. Persisting a prediction is a separate, explicit step.

pub mod audit;
pub mod classifier;
pub mod engine;
pub mod normalize;
pub mod population;
pub mod thresholds;
pub mod trend;

pub use audit::{InMemoryPredictionLog, PredictionRecord, PredictionRecorder};
pub use classifier::classify;
pub use engine::{assess_vitals, ScoreEngine};
pub use normalize::normalize;
pub use population::{DashboardQuery, PopulationAggregator};
pub use thresholds::{Band, BreakpointTable, ScoringTables};
pub use trend::analyze as analyze_trend;
