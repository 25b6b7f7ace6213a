use staking_payout_chain_api::EraIndex;

/// Eras with potentially unclaimed rewards: everything strictly between
/// the claim high-water mark and the active era.
///
/// The count `active - last_claimed - 1` can go negative when the
/// high-water mark runs right up against the active era; that simply
/// yields no candidates.
pub(crate) fn unclaimed_eras(last_claimed: EraIndex, active_era: EraIndex) -> Vec<EraIndex> {
    let num_unclaimed = i64::from(active_era) - i64::from(last_claimed) - 1;
    if num_unclaimed <= 0 {
        return Vec::new();
    }
    (last_claimed + 1..active_era).collect()
}

/// Partition candidate eras into consecutive windows of at most
/// `max_batch` eras. Windows are fixed before any exposure filtering.
pub(crate) fn claim_windows(eras: &[EraIndex], max_batch: usize) -> Vec<Vec<EraIndex>> {
    // chunks(0) panics
    let max_batch = max_batch.max(1);
    eras.chunks(max_batch).map(<[EraIndex]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_unclaimed_when_high_water_mark_reaches_active_era() {
        assert!(unclaimed_eras(9, 10).is_empty());
        assert!(unclaimed_eras(10, 10).is_empty());
        // High-water mark numerically past the active era.
        assert!(unclaimed_eras(12, 10).is_empty());
    }

    #[test]
    fn candidates_exclude_both_the_mark_and_the_active_era() {
        assert_eq!(unclaimed_eras(7, 10), vec![8, 9]);
    }

    #[test]
    fn twenty_three_eras_split_nine_nine_five() {
        let eras = unclaimed_eras(100, 124);
        assert_eq!(eras.len(), 23);
        assert_eq!(eras.first(), Some(&101));
        assert_eq!(eras.last(), Some(&123));

        let windows = claim_windows(&eras, 9);
        let sizes: Vec<usize> = windows.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![9, 9, 5]);

        // No gaps, no overlaps: rejoining the windows gives the eras back.
        let rejoined: Vec<_> = windows.into_iter().flatten().collect();
        assert_eq!(rejoined, eras);
    }

    #[test]
    fn exact_multiple_fills_every_window() {
        let eras = unclaimed_eras(0, 19);
        let windows = claim_windows(&eras, 9);
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(|w| w.len() == 9));
    }

    #[test]
    fn no_candidates_means_no_windows() {
        assert!(claim_windows(&[], 9).is_empty());
    }
}
