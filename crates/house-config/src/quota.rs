//! Percentage normalization and quota derivation
//!
//! Percentages are per lane and should total 100. Quotas are the absolute
//! listing targets derived from them; they always total the house maximum.

use ahbot_core::{LANE_COUNT, NORMAL_LANE, UNCOMMON_LANE};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Target share of listings per lane, in percent
pub type Percentages = [Decimal; LANE_COUNT];

/// Absolute listing target per lane
pub type Quotas = [u32; LANE_COUNT];

/// How far the percentage total may drift from 100 before it is rescaled
pub const PERCENT_TOLERANCE: Decimal = dec!(0.1);

/// Result of normalizing a percentage set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Total already within tolerance of 100
    Unchanged,
    /// Total was zero, the house should list nothing
    Disabled,
    /// Every value was scaled by `100 / total`
    Rescaled { total: Decimal },
    /// Total does not fit in a `Decimal`, the set cannot be used
    Overflowed,
}

/// Sum of all lanes, `None` when the addition overflows
pub fn checked_total(percentages: &Percentages) -> Option<Decimal> {
    percentages
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
}

/// Rescale `percentages` in place so they total 100.
///
/// A zero total is left untouched and reported as [`Normalization::Disabled`];
/// a total that overflows is left untouched and reported as
/// [`Normalization::Overflowed`].
pub fn normalize(percentages: &mut Percentages) -> Normalization {
    let Some(total) = checked_total(percentages) else {
        return Normalization::Overflowed;
    };

    if total.is_zero() {
        return Normalization::Disabled;
    }

    let within_tolerance = total
        .checked_sub(Decimal::ONE_HUNDRED)
        .is_some_and(|drift| drift.abs() <= PERCENT_TOLERANCE);
    if within_tolerance {
        return Normalization::Unchanged;
    }

    for value in percentages.iter_mut() {
        *value = value
            .checked_div(total)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO);
    }

    Normalization::Rescaled { total }
}

/// Derive per-lane quotas for `max_items`.
///
/// Each lane gets `ceil(percent / 100 * max_items)`. Rounding drift is then
/// pushed onto the normal lane (or uncommon when normal is too small) so the
/// quotas total exactly `max_items`.
pub fn derive_quotas(percentages: &Percentages, max_items: u32) -> Quotas {
    let max = Decimal::from(max_items);
    let mut quotas = [0u32; LANE_COUNT];

    for (quota, percent) in quotas.iter_mut().zip(percentages) {
        *quota = lane_quota(*percent, max);
    }

    balance(&mut quotas, max_items);
    quotas
}

fn lane_quota(percent: Decimal, max_items: Decimal) -> u32 {
    if percent <= Decimal::ZERO {
        return 0;
    }

    percent
        .checked_mul(max_items)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|quota| quota.ceil().to_u32())
        .unwrap_or(u32::MAX)
}

fn balance(quotas: &mut Quotas, max_items: u32) {
    let total: u64 = quotas.iter().map(|&q| u64::from(q)).sum();
    let target = u64::from(max_items);

    if total < target {
        // normal + shortfall <= target, so this cannot overflow
        quotas[NORMAL_LANE] += (target - total) as u32;
    } else if total > target {
        let overshoot = total - target;

        if u64::from(quotas[NORMAL_LANE]) > overshoot {
            quotas[NORMAL_LANE] -= overshoot as u32;
        } else if u64::from(quotas[UNCOMMON_LANE]) > overshoot {
            quotas[UNCOMMON_LANE] -= overshoot as u32;
        } else {
            debug!(
                "[AHBOT] Quota overshoot {} too large for normal/uncommon lanes, draining largest lanes",
                overshoot
            );
            drain_largest(quotas, overshoot);
        }
    }
}

/// Remove `overshoot` units, largest lane first
fn drain_largest(quotas: &mut Quotas, overshoot: u64) {
    let mut remaining = overshoot;

    while remaining > 0 {
        let Some((lane, largest)) = quotas
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, quota)| quota)
        else {
            break;
        };

        if largest == 0 {
            break;
        }

        let take = remaining.min(u64::from(largest));
        quotas[lane] -= take as u32;
        remaining -= take;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn percentages(values: &[(usize, Decimal)]) -> Percentages {
        let mut out = [Decimal::ZERO; LANE_COUNT];
        for &(lane, value) in values {
            out[lane] = value;
        }
        out
    }

    fn total(quotas: &Quotas) -> u64 {
        quotas.iter().map(|&q| u64::from(q)).sum()
    }

    #[test]
    fn test_normalize_exact_hundred_is_unchanged() {
        let mut p = percentages(&[(1, dec!(60)), (9, dec!(40))]);
        let before = p;

        assert_eq!(normalize(&mut p), Normalization::Unchanged);
        assert_eq!(p, before);
    }

    #[test]
    fn test_normalize_within_tolerance_is_unchanged() {
        let mut p = percentages(&[(1, dec!(60)), (9, dec!(40.05))]);

        assert_eq!(normalize(&mut p), Normalization::Unchanged);
        assert_eq!(p[9], dec!(40.05));
    }

    #[test]
    fn test_normalize_zero_total() {
        let mut p = [Decimal::ZERO; LANE_COUNT];
        assert_eq!(normalize(&mut p), Normalization::Disabled);
    }

    #[test]
    fn test_normalize_rescales() {
        let mut p = percentages(&[(1, dec!(30)), (2, dec!(10)), (8, dec!(10))]);

        assert_eq!(
            normalize(&mut p),
            Normalization::Rescaled { total: dec!(50) }
        );
        assert_eq!(p[1], dec!(60));
        assert_eq!(p[2], dec!(20));
        assert_eq!(p[8], dec!(20));
    }

    #[test]
    fn test_quotas_exact_split() {
        let p = percentages(&[(1, dec!(50)), (2, dec!(25)), (10, dec!(25))]);
        let quotas = derive_quotas(&p, 200);

        assert_eq!(quotas[1], 100);
        assert_eq!(quotas[2], 50);
        assert_eq!(quotas[10], 50);
        assert_eq!(total(&quotas), 200);
    }

    #[test]
    fn test_quotas_ceiling_overshoot_taken_from_normal() {
        // 3 lanes at 33.34% of 10 -> ceil(3.334) = 4 each, overshoot 2
        let p = percentages(&[(1, dec!(33.34)), (3, dec!(33.33)), (9, dec!(33.33))]);
        let quotas = derive_quotas(&p, 10);

        assert_eq!(quotas[3], 4);
        assert_eq!(quotas[9], 4);
        assert_eq!(quotas[1], 2);
        assert_eq!(total(&quotas), 10);
    }

    #[test]
    fn test_quotas_overshoot_falls_back_to_uncommon() {
        // normal lane rounds to 1, which cannot absorb the overshoot
        let p = percentages(&[
            (1, dec!(0.5)),
            (2, dec!(60)),
            (3, dec!(20)),
            (4, dec!(19.5)),
        ]);
        let quotas = derive_quotas(&p, 10);

        assert_eq!(quotas[1], 1);
        assert_eq!(quotas[3], 2);
        assert_eq!(quotas[4], 2);
        assert_eq!(quotas[2], 5);
        assert_eq!(total(&quotas), 10);
    }

    #[test]
    fn test_quotas_overshoot_drains_largest_when_needed() {
        // four lanes round up to 1 and lane 10 to 10: overshoot 4, normal and
        // uncommon hold 1 each, so the largest lane pays
        let p = percentages(&[
            (1, dec!(0.5)),
            (2, dec!(0.5)),
            (6, dec!(0.5)),
            (8, dec!(0.5)),
            (10, dec!(98)),
        ]);
        let quotas = derive_quotas(&p, 10);

        assert_eq!(quotas[10], 6);
        assert_eq!(quotas[1], 1);
        assert_eq!(quotas[2], 1);
        assert_eq!(quotas[6], 1);
        assert_eq!(quotas[8], 1);
        assert_eq!(total(&quotas), 10);
    }

    #[test]
    fn test_quotas_even_mix_drains_to_budget() {
        let even = Decimal::ONE_HUNDRED / Decimal::from(LANE_COUNT as u32);
        let p = [even; LANE_COUNT];
        let quotas = derive_quotas(&p, 5);

        // every lane rounds up to 1; ties drain from the highest lane down
        assert_eq!(quotas, [1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_normalize_overflowing_total() {
        let mut p = percentages(&[(1, Decimal::MAX), (8, Decimal::ONE)]);
        let before = p;

        assert_eq!(checked_total(&p), None);
        assert_eq!(normalize(&mut p), Normalization::Overflowed);
        assert_eq!(p, before);
    }

    #[test]
    fn test_checked_total() {
        let p = percentages(&[(1, dec!(60)), (9, dec!(40))]);
        assert_eq!(checked_total(&p), Some(dec!(100)));
    }

    #[test]
    fn test_quotas_undershoot_added_to_normal() {
        // 99.9% total is within tolerance, the missing share lands on normal
        let p = percentages(&[(1, dec!(9.9)), (8, dec!(90))]);
        let quotas = derive_quotas(&p, 1000);

        assert_eq!(quotas[8], 900);
        assert_eq!(quotas[1], 100);
        assert_eq!(total(&quotas), 1000);
    }

    #[test]
    fn test_quotas_zero_max_items() {
        let p = percentages(&[(1, dec!(100))]);
        assert_eq!(derive_quotas(&p, 0), [0; LANE_COUNT]);
    }

    #[test]
    fn test_negative_percent_yields_zero_quota() {
        let p = percentages(&[(1, dec!(110)), (3, dec!(-10))]);
        let quotas = derive_quotas(&p, 100);

        assert_eq!(quotas[3], 0);
        assert_eq!(total(&quotas), 100);
    }
}
