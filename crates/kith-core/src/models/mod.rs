pub mod assessment;
pub mod contact;
pub mod drift_alert;
pub mod health;

pub use assessment::ContactAssessment;
pub use contact::{AssessmentContext, ContactRecord, ContactSignals};
pub use drift_alert::{DriftAlert, DriftEvidence, DriftSeverity};
pub use health::{CadenceBreakdown, CadenceSource, HealthBreakdown, HealthStatus};
