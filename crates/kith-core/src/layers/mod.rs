//! Layer catalog: the static table of the six relationship tiers.

pub mod catalog;
pub mod templates;

pub use catalog::{LayerCatalog, LayerConfig};
pub use templates::{NudgeStyle, NudgeTemplate, NudgeTrigger};
