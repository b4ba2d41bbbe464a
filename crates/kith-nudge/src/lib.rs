//! # kith-nudge
//!
//! Picks a reminder template for a contact's health state.
//! Cosmetic layer on top of health classification: a weighted draw between
//! the user's preferred style pool and the layer's base pool. The random
//! source is always injected so selection is reproducible under a seed.

pub mod selector;

pub use selector::{matching_templates, pick_template, render_nudge};
