use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::KithError;

/// The six relationship tiers ("layers").
///
/// Variant order is significant: the first four form the active layer order,
/// innermost to outermost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    InnerCircle,
    Nurture,
    Maintain,
    Transactional,
    Dormant,
    New,
}

impl IntentType {
    /// Total number of tiers.
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [IntentType; 6] = [
        Self::InnerCircle,
        Self::Nurture,
        Self::Maintain,
        Self::Transactional,
        Self::Dormant,
        Self::New,
    ];

    /// Active layer order, innermost to outermost.
    pub const ACTIVE_ORDER: [IntentType; 4] = [
        Self::InnerCircle,
        Self::Nurture,
        Self::Maintain,
        Self::Transactional,
    ];

    /// Position in [`Self::ACTIVE_ORDER`], or `None` for inactive tiers.
    pub fn active_index(self) -> Option<usize> {
        Self::ACTIVE_ORDER.iter().position(|&l| l == self)
    }

    /// Whether the tier carries a default cadence and can drift.
    pub fn is_active(self) -> bool {
        self.active_index().is_some()
    }

    /// The outermost active layer. Further decay there is a health concern, not drift.
    pub fn is_outermost(self) -> bool {
        self == Self::ACTIVE_ORDER[Self::ACTIVE_ORDER.len() - 1]
    }

    /// Wire name, as stored by the contact service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InnerCircle => "inner_circle",
            Self::Nurture => "nurture",
            Self::Maintain => "maintain",
            Self::Transactional => "transactional",
            Self::Dormant => "dormant",
            Self::New => "new",
        }
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentType {
    type Err = KithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| KithError::InvalidInput {
                field: "intent".to_string(),
                message: format!("unknown intent {s:?}"),
            })
    }
}
