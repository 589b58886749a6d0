use crate::domain::TeamHalfPair;

/// Percentage of massive chances with a shot that became goals, rounded
/// to the nearest whole percent. None when there is no denominator; the
/// guard fires even with a nonzero goal count.
pub fn conversion_rate(goals: u32, massive_chances_shot: u32) -> Option<u32> {
    if massive_chances_shot == 0 {
        return None;
    }
    let rate = f64::from(goals) / f64::from(massive_chances_shot) * 100.0;
    Some(rate.round() as u32)
}

/// Clinicality for a single match (both halves of one side)
pub fn match_rate(pair: &TeamHalfPair) -> Option<u32> {
    let totals = pair.totals();
    conversion_rate(totals.goals, totals.massive_chances_shot)
}

/// Season clinicality: goals and massive chances are summed across all
/// halves of all matches first, then divided once. A ratio of sums, not
/// an average of per-match rates.
pub fn season_rate<'a, I>(pairs: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a TeamHalfPair>,
{
    let mut goals = 0;
    let mut massive_shots = 0;

    for pair in pairs {
        let totals = pair.totals();
        goals += totals.goals;
        massive_shots += totals.massive_chances_shot;
    }

    conversion_rate(goals, massive_shots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HalfStats;

    fn pair_with(goals: u32, massive_shots: u32) -> TeamHalfPair {
        TeamHalfPair {
            first_half: HalfStats {
                goals,
                massive_chances_shot: massive_shots,
                ..HalfStats::default()
            },
            second_half: HalfStats::default(),
        }
    }

    #[test]
    fn zero_denominator_is_no_data() {
        assert_eq!(conversion_rate(0, 0), None);
        // Guard fires even when goals were recorded without a massive chance
        assert_eq!(conversion_rate(3, 0), None);
    }

    #[test]
    fn rounds_to_nearest_percent() {
        assert_eq!(conversion_rate(1, 3), Some(33));
        assert_eq!(conversion_rate(2, 3), Some(67));
        assert_eq!(conversion_rate(2, 2), Some(100));
    }

    #[test]
    fn season_rate_is_ratio_of_sums() {
        // Per-match rates would be 100% and 20% (average 60%); the
        // season figure divides the sums instead: 2/6 = 33%.
        let matches = [pair_with(1, 1), pair_with(1, 5)];
        assert_eq!(season_rate(&matches), Some(33));
    }

    #[test]
    fn season_rate_without_chances_is_no_data() {
        let matches = [pair_with(0, 0), pair_with(2, 0)];
        assert_eq!(season_rate(&matches), None);

        let empty: Vec<TeamHalfPair> = Vec::new();
        assert_eq!(season_rate(&empty), None);
    }
}
