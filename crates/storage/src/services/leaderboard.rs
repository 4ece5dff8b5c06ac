use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::leaderboard::{LeaderboardRow, LeaderboardView};
use crate::models::{Avatar, DailyEntry};

use super::scoring::entry_score;

struct Tally {
    user_id: Uuid,
    name: Option<String>,
    photo_url: Option<String>,
    total_score: u32,
}

/// Sums entry scores per user and ranks users by total, highest first.
///
/// Entries without a joined user are skipped. A user's name and photo come
/// from the last of their entries in input order. Users with equal totals
/// keep the order in which they were first seen.
pub fn aggregate_leaderboard(entries: &[DailyEntry]) -> LeaderboardView {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for entry in entries {
        let Some(user) = entry.user.as_ref() else {
            continue;
        };

        let position = *positions.entry(user.id).or_insert_with(|| {
            tallies.push(Tally {
                user_id: user.id,
                name: None,
                photo_url: None,
                total_score: 0,
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[position];
        tally.name = user.name.clone();
        tally.photo_url = user.photo_url.clone();
        tally.total_score += u32::from(entry_score(entry));
    }

    if tallies.is_empty() {
        return LeaderboardView::Empty;
    }

    tallies.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    let rows = tallies
        .into_iter()
        .zip(1u32..)
        .map(|(tally, rank)| LeaderboardRow {
            rank,
            user_id: tally.user_id,
            avatar: Avatar::new(tally.name.as_deref(), tally.photo_url.as_deref()),
            name: tally.name,
            photo_url: tally.photo_url,
            total_score: tally.total_score,
        })
        .collect();

    LeaderboardView::Ranked(rows)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{CriteriaFlags, Criterion, EntryUser};
    use crate::services::scoring::entry_score;

    fn user(id: u128, name: &str) -> EntryUser {
        EntryUser {
            id: Uuid::from_u128(id),
            name: Some(name.to_string()),
            photo_url: None,
        }
    }

    /// Entry for `user` on `day` of March 2024 meeting the first `score`
    /// criteria.
    fn entry(user: Option<EntryUser>, day: u32, score: usize) -> DailyEntry {
        DailyEntry {
            user_id: user.as_ref().map(|u| u.id),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            flags: CriteriaFlags::from_met(Criterion::ALL.into_iter().take(score)),
            images: None,
            created_at: None,
            user,
        }
    }

    fn totals(view: &LeaderboardView) -> Vec<(u32, u32)> {
        view.rows()
            .iter()
            .map(|row| (row.rank, row.total_score))
            .collect()
    }

    #[test]
    fn test_empty_input_is_explicit_empty_state() {
        assert!(aggregate_leaderboard(&[]).is_empty());
    }

    #[test]
    fn test_only_orphan_entries_is_empty() {
        let entries = vec![entry(None, 1, 7), entry(None, 2, 3)];
        assert_eq!(aggregate_leaderboard(&entries), LeaderboardView::Empty);
    }

    #[test]
    fn test_sums_entries_of_same_user() {
        let ada = user(1, "Ada");
        let entries = vec![entry(Some(ada.clone()), 1, 3), entry(Some(ada), 2, 5)];

        let view = aggregate_leaderboard(&entries);

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].total_score, 8);
        assert_eq!(view.rows()[0].rank, 1);
    }

    #[test]
    fn test_ranks_descending() {
        let entries = vec![
            entry(Some(user(1, "Seven")), 1, 7),
            entry(Some(user(2, "Three")), 1, 3),
            entry(Some(user(3, "Five")), 1, 5),
        ];

        let view = aggregate_leaderboard(&entries);
        let names: Vec<_> = view
            .rows()
            .iter()
            .map(|row| row.name.as_deref().unwrap())
            .collect();

        assert_eq!(names, vec!["Seven", "Five", "Three"]);
        assert_eq!(totals(&view), vec![(1, 7), (2, 5), (3, 3)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let entries = vec![
            entry(Some(user(2, "Bo")), 1, 2),
            entry(Some(user(1, "Al")), 1, 4),
            entry(Some(user(3, "Cy")), 1, 4),
            entry(Some(user(2, "Bo")), 2, 2),
        ];

        let view = aggregate_leaderboard(&entries);
        let ids: Vec<Uuid> = view.rows().iter().map(|row| row.user_id).collect();

        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(1), Uuid::from_u128(3)]
        );
        assert_eq!(totals(&view), vec![(1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_last_seen_profile_wins() {
        let mut renamed = user(1, "Ada Lovelace");
        renamed.photo_url = Some("https://cdn.test/ada.png".to_string());
        let entries = vec![
            entry(Some(user(1, "Ada")), 1, 1),
            entry(Some(renamed), 2, 1),
        ];

        let view = aggregate_leaderboard(&entries);
        let row = &view.rows()[0];

        assert_eq!(row.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(row.photo_url.as_deref(), Some("https://cdn.test/ada.png"));
        assert_eq!(
            row.avatar,
            Avatar::Photo {
                url: "https://cdn.test/ada.png".to_string()
            }
        );
    }

    #[test]
    fn test_total_is_conserved_and_ranks_are_monotonic() {
        let entries = vec![
            entry(Some(user(1, "A")), 1, 6),
            entry(None, 1, 7),
            entry(Some(user(2, "B")), 1, 2),
            entry(Some(user(3, "C")), 2, 0),
            entry(Some(user(2, "B")), 2, 7),
            entry(Some(user(1, "A")), 3, 1),
            entry(Some(user(4, "D")), 3, 4),
        ];

        let view = aggregate_leaderboard(&entries);

        let expected: u32 = entries
            .iter()
            .filter(|e| e.user.is_some())
            .map(|e| u32::from(entry_score(e)))
            .sum();
        let actual: u32 = view.rows().iter().map(|row| row.total_score).sum();
        assert_eq!(actual, expected);

        let rows = view.rows();
        assert!(rows.windows(2).all(|w| w[0].total_score >= w[1].total_score));
        assert!(rows.iter().all(|row| rows[0].total_score >= row.total_score));
        let ranks: Vec<u32> = rows.iter().map(|row| row.rank).collect();
        assert_eq!(ranks, (1..=rows.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_user_without_entries_is_absent() {
        let entries = vec![entry(Some(user(1, "Ada")), 1, 3)];
        let view = aggregate_leaderboard(&entries);

        assert!(
            view.rows()
                .iter()
                .all(|row| row.user_id != Uuid::from_u128(2))
        );
    }
}
