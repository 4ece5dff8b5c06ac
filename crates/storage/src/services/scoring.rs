use crate::models::{CriteriaFlags, Criterion, DailyEntry};

/// Number of criteria met, in `0..=Criterion::COUNT`.
pub fn score(flags: &CriteriaFlags) -> u8 {
    Criterion::ALL
        .iter()
        .filter(|criterion| flags.is_met(**criterion))
        .count() as u8
}

pub fn entry_score(entry: &DailyEntry) -> u8 {
    score(&entry.flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_met_criteria() {
        let flags = CriteriaFlags {
            workout: true,
            steps: true,
            sleep: false,
            protein: true,
            no_sugar_fried: false,
            no_alcohol_smoking: true,
            water: false,
        };
        assert_eq!(score(&flags), 4);
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(score(&CriteriaFlags::default()), 0);
        assert_eq!(
            score(&CriteriaFlags::from_met(Criterion::ALL)),
            Criterion::COUNT
        );
    }

    #[test]
    fn test_score_matches_true_count_for_every_combination() {
        for mask in 0u8..(1 << Criterion::COUNT) {
            let flags = CriteriaFlags::from_met(
                Criterion::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, criterion)| criterion),
            );
            assert_eq!(score(&flags), mask.count_ones() as u8);
        }
    }

    #[test]
    fn test_score_ignores_unrelated_fields() {
        let plain: DailyEntry = serde_json::from_value(serde_json::json!({
            "entry_date": "2024-03-05",
            "water": true,
            "sleep": true,
        }))
        .unwrap();
        let noisy: DailyEntry = serde_json::from_value(serde_json::json!({
            "sleep": true,
            "notes": "ran in the rain",
            "calories": 2100,
            "entry_date": "2024-03-05",
            "water": true,
        }))
        .unwrap();

        assert_eq!(entry_score(&plain), 2);
        assert_eq!(entry_score(&noisy), entry_score(&plain));
    }

    #[test]
    fn test_score_treats_null_and_malformed_flags_as_missed() {
        let entry: DailyEntry = serde_json::from_value(serde_json::json!({
            "entry_date": "2024-03-05",
            "workout": null,
            "steps": "yes",
            "sleep": 1,
            "protein": 0,
            "water": true,
        }))
        .unwrap();

        assert_eq!(entry_score(&entry), 2);
    }
}
