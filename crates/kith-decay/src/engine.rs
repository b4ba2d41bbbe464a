use std::sync::Arc;

use chrono::{DateTime, Utc};
use kith_core::calibration::Calibration;
use kith_core::config::KithConfig;
use kith_core::errors::ConfigError;
use kith_core::models::{
    AssessmentContext, ContactAssessment, ContactSignals, DriftAlert, HealthBreakdown,
    HealthStatus,
};
use kith_core::observability::events;
use kith_core::traits::IRelationshipEvaluator;
use rayon::prelude::*;

use crate::{drift, health};

/// Composes cadence, health, and drift over one shared set of calibration tables.
///
/// Cheap to clone; the tables are behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct RelationshipEngine {
    calibration: Arc<Calibration>,
}

impl RelationshipEngine {
    /// Engine over the canonical tables.
    pub fn new() -> Self {
        Self::with_calibration(Arc::new(Calibration::canonical().clone()))
    }

    pub fn with_calibration(calibration: Arc<Calibration>) -> Self {
        Self { calibration }
    }

    /// Build and validate tables from config.
    pub fn from_config(config: &KithConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_calibration(Arc::new(Calibration::from_config(config)?)))
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Health with every intermediate value.
    pub fn health(&self, contact: &ContactSignals, ctx: &AssessmentContext) -> HealthBreakdown {
        let breakdown = health::health_breakdown(&self.calibration, contact, ctx);
        events::health_evaluated(
            &contact.contact_id,
            contact.intent,
            breakdown.status,
            breakdown.ratio,
        );
        breakdown
    }

    /// Drift for one contact, logged when found.
    pub fn drift(&self, contact: &ContactSignals, now: DateTime<Utc>) -> Option<DriftAlert> {
        let alert = drift::detect_drift(&self.calibration, contact, now)?;
        events::drift_detected(
            &alert.contact_id,
            alert.current_layer,
            alert.drifting_toward,
            alert.severity,
            alert.evidence.avg_interval_days,
        );
        Some(alert)
    }

    /// Full assessment of one contact.
    pub fn assess(&self, contact: &ContactSignals, ctx: &AssessmentContext) -> ContactAssessment {
        ContactAssessment {
            contact_id: contact.contact_id.clone(),
            intent: contact.intent,
            health: self.health(contact, ctx),
            drift: self.drift(contact, ctx.now),
            assessed_at: ctx.now,
        }
    }

    /// Assess a batch in parallel. Output order matches input order.
    pub fn assess_batch(
        &self,
        contacts: &[ContactSignals],
        ctx: &AssessmentContext,
    ) -> Vec<ContactAssessment> {
        let assessments: Vec<ContactAssessment> =
            contacts.par_iter().map(|c| self.assess(c, ctx)).collect();

        let count = |status: HealthStatus| {
            assessments
                .iter()
                .filter(|a| a.health.status == status)
                .count()
        };
        events::batch_assessed(
            assessments.len(),
            count(HealthStatus::Red),
            count(HealthStatus::Yellow),
            assessments.iter().filter(|a| a.drift.is_some()).count(),
        );
        assessments
    }

    /// Drift alerts across a batch, with recently raised alerts dampened.
    pub fn drift_alerts(
        &self,
        contacts: &[ContactSignals],
        recent: &[DriftAlert],
        now: DateTime<Utc>,
    ) -> Vec<DriftAlert> {
        let alerts: Vec<DriftAlert> = contacts
            .par_iter()
            .filter_map(|c| self.drift(c, now))
            .collect();
        drift::dampen(alerts, recent, self.calibration.alerts(), now)
    }
}

impl Default for RelationshipEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IRelationshipEvaluator for RelationshipEngine {
    fn evaluate(&self, contact: &ContactSignals, ctx: &AssessmentContext) -> ContactAssessment {
        self.assess(contact, ctx)
    }
}
