//! Forward-filling of unresolved metric buckets
//!
//! A bucket that received no reading inherits the last observed value.
//! Buckets before the first observation have nothing to inherit and stay
//! unresolved; `FillPolicy` decides whether those serialize as null or as
//! numeric zero (the legacy presentation, where zero means "no data yet").

use crate::domain::FillPolicy;

/// Carry the last resolved value forward across unresolved buckets
pub fn forward_fill<T: Copy>(values: &[Option<T>]) -> Vec<Option<T>> {
    let mut last: Option<T> = None;
    values
        .iter()
        .map(|v| {
            if v.is_some() {
                last = *v;
            }
            last
        })
        .collect()
}

/// Apply the presentation policy to a forward-filled array
pub fn apply_policy<T: Copy + Default>(values: Vec<Option<T>>, policy: FillPolicy) -> Vec<Option<T>> {
    match policy {
        FillPolicy::Nullable => values,
        FillPolicy::ZeroFill => {
            values.into_iter().map(|v| Some(v.unwrap_or_default())).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_fill_carries_last_value() {
        let filled = forward_fill(&[Some(21.5), None, None, Some(22.0), None]);
        assert_eq!(filled, vec![Some(21.5), Some(21.5), Some(21.5), Some(22.0), Some(22.0)]);
    }

    #[test]
    fn test_forward_fill_leading_gap_stays_unresolved() {
        let filled = forward_fill(&[None, None, Some(5), None]);
        assert_eq!(filled, vec![None, None, Some(5), Some(5)]);
    }

    #[test]
    fn test_forward_fill_single_observation_propagates_to_end() {
        let filled = forward_fill(&[Some(19.0), None, None, None]);
        assert_eq!(filled, vec![Some(19.0); 4]);
    }

    #[test]
    fn test_forward_fill_all_empty() {
        let filled: Vec<Option<i64>> = forward_fill(&[None, None]);
        assert_eq!(filled, vec![None, None]);
    }

    #[test]
    fn test_zero_fill_policy() {
        let values = vec![None, Some(21.5), None];
        assert_eq!(
            apply_policy(values.clone(), FillPolicy::Nullable),
            vec![None, Some(21.5), None]
        );
        assert_eq!(
            apply_policy(values, FillPolicy::ZeroFill),
            vec![Some(0.0), Some(21.5), Some(0.0)]
        );
    }
}
