pub mod relationship_evaluator;

pub use relationship_evaluator::IRelationshipEvaluator;
