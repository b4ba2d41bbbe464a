use std::collections::BTreeMap;

use crate::config::defaults;
use crate::intent::IntentType;

use super::templates::{self, NudgeStyle, NudgeTemplate};

/// Static configuration for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerConfig {
    pub intent: IntentType,
    /// Baseline reminder interval. `None` for `dormant` and `new`.
    pub default_cadence_days: Option<f64>,
    /// Cadence multiple at which the contact is "slipping".
    pub yellow_threshold: f64,
    /// Cadence multiple at which the contact is "overdue".
    pub red_threshold: f64,
    /// Fraction by which thresholds relax for kin.
    pub kin_decay_modifier: f64,
    pub nudge_templates: Vec<NudgeTemplate>,
    pub styled_templates: BTreeMap<NudgeStyle, Vec<NudgeTemplate>>,
}

impl LayerConfig {
    /// Canonical configuration for a tier.
    pub fn canonical(intent: IntentType) -> Self {
        let (cadence, yellow, red, kin) = match intent {
            IntentType::InnerCircle => (
                Some(defaults::INNER_CIRCLE_CADENCE_DAYS),
                defaults::INNER_CIRCLE_YELLOW,
                defaults::UNIFORM_RED,
                defaults::INNER_CIRCLE_KIN_MODIFIER,
            ),
            IntentType::Nurture => (
                Some(defaults::NURTURE_CADENCE_DAYS),
                defaults::NURTURE_YELLOW,
                defaults::UNIFORM_RED,
                defaults::NURTURE_KIN_MODIFIER,
            ),
            IntentType::Maintain => (
                Some(defaults::MAINTAIN_CADENCE_DAYS),
                defaults::MAINTAIN_YELLOW,
                defaults::UNIFORM_RED,
                defaults::MAINTAIN_KIN_MODIFIER,
            ),
            IntentType::Transactional => (
                Some(defaults::TRANSACTIONAL_CADENCE_DAYS),
                defaults::TRANSACTIONAL_YELLOW,
                defaults::UNIFORM_RED,
                defaults::TRANSACTIONAL_KIN_MODIFIER,
            ),
            IntentType::Dormant => (
                None,
                defaults::INACTIVE_YELLOW,
                defaults::UNIFORM_RED,
                defaults::DORMANT_KIN_MODIFIER,
            ),
            IntentType::New => (
                None,
                defaults::INACTIVE_YELLOW,
                defaults::UNIFORM_RED,
                defaults::NEW_KIN_MODIFIER,
            ),
        };

        Self {
            intent,
            default_cadence_days: cadence,
            yellow_threshold: yellow,
            red_threshold: red,
            kin_decay_modifier: kin,
            nudge_templates: templates::default_templates(intent),
            styled_templates: templates::default_styled_templates(intent),
        }
    }

    /// Threshold relaxation for a contact: `1 + kin_decay_modifier` for kin, else 1.
    pub fn kin_multiplier(&self, is_kin: bool) -> f64 {
        if is_kin {
            1.0 + self.kin_decay_modifier
        } else {
            1.0
        }
    }

    /// Styled pool for `style`, empty when the layer has none.
    pub fn styled(&self, style: NudgeStyle) -> &[NudgeTemplate] {
        self.styled_templates
            .get(&style)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The six layer configs, indexed by tier.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCatalog {
    layers: [LayerConfig; IntentType::COUNT],
}

impl LayerCatalog {
    /// Build a catalog from one config per tier, in [`IntentType::ALL`] order.
    pub fn from_layers(layers: [LayerConfig; IntentType::COUNT]) -> Self {
        Self { layers }
    }

    pub fn get(&self, intent: IntentType) -> &LayerConfig {
        &self.layers[intent as usize]
    }

    pub fn get_mut(&mut self, intent: IntentType) -> &mut LayerConfig {
        &mut self.layers[intent as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter()
    }

    /// Layers in the active order, innermost first.
    pub fn active(&self) -> impl Iterator<Item = &LayerConfig> {
        IntentType::ACTIVE_ORDER.iter().map(|&i| self.get(i))
    }
}

impl Default for LayerCatalog {
    fn default() -> Self {
        Self::from_layers(IntentType::ALL.map(LayerConfig::canonical))
    }
}
