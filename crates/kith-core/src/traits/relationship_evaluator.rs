use crate::errors::KithResult;
use crate::models::{AssessmentContext, ContactAssessment, ContactRecord, ContactSignals};

/// Relationship health and drift evaluation.
pub trait IRelationshipEvaluator: Send + Sync {
    /// Evaluate one validated contact.
    fn evaluate(&self, contact: &ContactSignals, ctx: &AssessmentContext) -> ContactAssessment;

    /// Validate a raw contact-store record, then evaluate it.
    fn evaluate_record(
        &self,
        record: ContactRecord,
        ctx: &AssessmentContext,
    ) -> KithResult<ContactAssessment> {
        let signals = ContactSignals::try_from(record)?;
        Ok(self.evaluate(&signals, ctx))
    }
}
