//! Largest-remainder (Hamilton) apportionment.
//!
//! Splits an integer total across weighted entries so that the parts sum to
//! the total exactly. Every entry first takes the floor of its ideal share;
//! the units still unassigned go one each to the entries with the largest
//! fractional remainders. Equal remainders are ordered by entry index, lowest
//! first, so the outcome is deterministic.

use super::errors::{AllocationError, AllocationResult};

/// Apportion `total` units across `weights`.
///
/// Weights must be finite and non-negative with a positive sum. An entry with
/// weight 0 receives nothing.
///
/// # Examples
///
/// ```
/// use prize_tiers::allocation::apportion;
///
/// assert_eq!(apportion(10, &[1.0, 1.0, 1.0]).unwrap(), vec![4, 3, 3]);
/// assert_eq!(apportion(16, &[1.0, 2.0, 3.0, 4.0]).unwrap(), vec![2, 3, 5, 6]);
/// ```
pub fn apportion(total: u64, weights: &[f64]) -> AllocationResult<Vec<u64>> {
    if weights.is_empty() {
        return Err(AllocationError::InvalidWeights(
            "no entries to apportion over".to_string(),
        ));
    }

    if let Some((idx, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(AllocationError::InvalidWeights(format!(
            "weight {w} at index {idx} is not a finite non-negative number"
        )));
    }

    let weight_sum: f64 = weights.iter().sum();
    if !weight_sum.is_finite() || weight_sum <= 0.0 {
        return Err(AllocationError::InvalidWeights(format!(
            "weights sum to {weight_sum}"
        )));
    }

    let mut shares = vec![0u64; weights.len()];
    if total == 0 {
        return Ok(shares);
    }

    let mut remainders = Vec::with_capacity(weights.len());
    let mut assigned = 0u64;
    for (idx, &w) in weights.iter().enumerate() {
        let ideal = total as f64 * w / weight_sum;
        let whole = ideal.floor();
        shares[idx] = whole as u64;
        assigned += shares[idx];
        if w > 0.0 {
            remainders.push((idx, ideal - whole));
        }
    }

    remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    // Floating-point error can push the floors one unit past the total on
    // very large inputs; take it back from the smallest remainders.
    let mut excess = assigned.saturating_sub(total);
    for &(idx, _) in remainders.iter().rev() {
        if excess == 0 {
            break;
        }
        if shares[idx] > 0 {
            shares[idx] -= 1;
            excess -= 1;
        }
    }

    let left = total.saturating_sub(assigned);
    for &(idx, _) in remainders.iter().cycle().take(left as usize) {
        shares[idx] += 1;
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_weights_tie_goes_to_lowest_index() {
        assert_eq!(apportion(7, &[1.0, 1.0, 1.0]).unwrap(), vec![3, 2, 2]);
        assert_eq!(apportion(8, &[1.0, 1.0, 1.0]).unwrap(), vec![3, 3, 2]);
    }

    #[test]
    fn test_exact_division_has_no_remainder_units() {
        assert_eq!(apportion(5, &[1.0; 5]).unwrap(), vec![1, 1, 1, 1, 1]);
        assert_eq!(apportion(12, &[1.0, 2.0, 3.0]).unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn test_largest_remainders_win() {
        // Ideals 1.714, 3.429, 6.857: floors 1, 3, 6 leave 2 units for
        // indices 2 (0.857) and 0 (0.714).
        assert_eq!(apportion(12, &[1.0, 2.0, 4.0]).unwrap(), vec![2, 3, 7]);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(apportion(0, &[1.0, 2.0]).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_zero_weight_entry_gets_nothing() {
        assert_eq!(apportion(5, &[0.0, 1.0, 0.0]).unwrap(), vec![0, 5, 0]);
        assert_eq!(apportion(3, &[1.0, 0.0, 1.0]).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_fractional_weights_sum_exactly() {
        let weights = [1.0, 1.5, 2.25, 3.375, 5.0625];
        for total in [1, 2, 3, 17, 99, 1000, 12_345] {
            let shares = apportion(total, &weights).unwrap();
            assert_eq!(shares.iter().sum::<u64>(), total, "total {total}");
        }
    }

    #[test]
    fn test_rejects_empty_weights() {
        assert!(matches!(
            apportion(3, &[]),
            Err(AllocationError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_negative_and_non_finite_weights() {
        assert!(apportion(3, &[1.0, -1.0]).is_err());
        assert!(apportion(3, &[1.0, f64::NAN]).is_err());
        assert!(apportion(3, &[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        assert!(apportion(3, &[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_overflowing_weight_sum_rejected() {
        assert!(apportion(3, &[f64::MAX, f64::MAX]).is_err());
    }
}
