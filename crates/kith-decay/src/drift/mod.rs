//! Drift detection: does a contact's actual contact frequency now resemble
//! an outer tier? Structurally separate from health: health asks "are you
//! keeping up with this tier", drift asks "which tier does your behaviour
//! match".

pub mod dampening;
pub mod detector;
pub mod gaps;

pub use dampening::dampen;
pub use detector::detect_drift;
pub use gaps::{gap_sequence, mean_interval};
