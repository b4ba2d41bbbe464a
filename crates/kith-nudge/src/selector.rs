use kith_core::calibration::{Calibration, Gender};
use kith_core::intent::IntentType;
use kith_core::layers::NudgeTemplate;
use kith_core::models::HealthStatus;
use rand::seq::SliceRandom;
use rand::Rng;

/// Templates in `pool` whose trigger matches `status`.
pub fn matching_templates(pool: &[NudgeTemplate], status: HealthStatus) -> Vec<&NudgeTemplate> {
    pool.iter().filter(|t| t.trigger.matches(status)).collect()
}

/// Pick a template for `intent` at `status`.
///
/// With a gender profile, a uniform draw below the profile's style weight
/// selects from the preferred-style pool (filtered by trigger). A failed
/// draw, a missing profile, or an empty styled match falls through to the
/// base pool filtered by trigger, and finally to any base template.
///
/// `None` only when the layer has no templates at all (`dormant`).
pub fn pick_template<'a, R: Rng + ?Sized>(
    calibration: &'a Calibration,
    intent: IntentType,
    status: HealthStatus,
    gender: Option<Gender>,
    rng: &mut R,
) -> Option<&'a NudgeTemplate> {
    let layer = calibration.layer(intent);
    if layer.nudge_templates.is_empty() {
        return None;
    }

    if let Some(profile) = calibration.gender_profile(gender) {
        if rng.gen::<f64>() < profile.style_weight {
            let styled = matching_templates(layer.styled(profile.preferred_style), status);
            if let Some(t) = styled.choose(rng) {
                tracing::trace!(intent = %intent, style = ?profile.preferred_style, "styled nudge");
                return Some(*t);
            }
        }
    }

    let base = matching_templates(&layer.nudge_templates, status);
    match base.choose(rng) {
        Some(t) => Some(*t),
        None => layer.nudge_templates.choose(rng),
    }
}

/// Pick a template and render it for `name`.
pub fn render_nudge<R: Rng + ?Sized>(
    calibration: &Calibration,
    intent: IntentType,
    status: HealthStatus,
    gender: Option<Gender>,
    name: &str,
    rng: &mut R,
) -> Option<String> {
    pick_template(calibration, intent, status, gender, rng).map(|t| t.render(name))
}
