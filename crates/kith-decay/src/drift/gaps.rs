use chrono::{DateTime, Utc};
use kith_core::time::days_between;

/// Gap sequence in days: `now - newest`, then the gaps between consecutive
/// interactions, newest first.
///
/// The leading "now" gap keeps a contact that went quiet right after a flurry
/// of old interactions from looking healthy.
pub fn gap_sequence(now: DateTime<Utc>, interaction_dates: &[DateTime<Utc>]) -> Vec<f64> {
    let mut sorted = interaction_dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&newest) = sorted.first() else {
        return Vec::new();
    };

    std::iter::once(days_between(now, newest))
        .chain(sorted.windows(2).map(|w| days_between(w[0], w[1])))
        .collect()
}

/// Arithmetic mean of the gaps. `None` for an empty sequence.
pub fn mean_interval(gaps: &[f64]) -> Option<f64> {
    if gaps.is_empty() {
        return None;
    }
    Some(gaps.iter().sum::<f64>() / gaps.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn gaps_are_newest_first_regardless_of_input_order() {
        let now = Utc::now();
        let dates = vec![
            now - Duration::days(113),
            now - Duration::days(40),
            now - Duration::days(78),
        ];
        assert_eq!(gap_sequence(now, &dates), vec![40.0, 38.0, 35.0]);
    }

    #[test]
    fn duplicate_timestamps_produce_zero_gaps() {
        let now = Utc::now();
        let d = now - Duration::days(10);
        assert_eq!(gap_sequence(now, &[d, d]), vec![10.0, 0.0]);
    }

    #[test]
    fn empty_input() {
        assert!(gap_sequence(Utc::now(), &[]).is_empty());
        assert_eq!(mean_interval(&[]), None);
        assert_eq!(mean_interval(&[40.0, 38.0, 35.0]).map(|m| (m * 10.0).round()), Some(377.0));
    }
}
