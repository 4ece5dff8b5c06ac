use std::cmp::Reverse;

use crate::dto::feed::{CriterionBadge, FeedAuthor, FeedItem, FeedView};
use crate::models::{Avatar, Criterion, DailyEntry};

use super::date_format::DateFormatter;
use super::scoring::entry_score;

const ANONYMOUS: &str = "Anonymous";

/// Builds the feed: newest `entry_date` first, then newest `created_at`.
/// Entries tied on both keys keep their input order.
pub fn project_feed(entries: &[DailyEntry], dates: &DateFormatter) -> FeedView {
    if entries.is_empty() {
        return FeedView::Empty;
    }

    let mut ordered: Vec<&DailyEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| Reverse((entry.entry_date, entry.created_at)));

    FeedView::Entries(
        ordered
            .into_iter()
            .map(|entry| render_entry(entry, dates))
            .collect(),
    )
}

/// View model for a single entry.
pub fn render_entry(entry: &DailyEntry, dates: &DateFormatter) -> FeedItem {
    let name = entry.user.as_ref().and_then(|user| user.name.as_deref());
    let photo_url = entry.user.as_ref().and_then(|user| user.photo_url.as_deref());

    let author = FeedAuthor {
        user_id: entry.user.as_ref().map(|user| user.id),
        display_name: name
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS)
            .to_string(),
        avatar: Avatar::new(name, photo_url),
    };

    let criteria = Criterion::ALL
        .into_iter()
        .map(|criterion| CriterionBadge {
            criterion,
            label: criterion.label().to_string(),
            met: entry.flags.is_met(criterion),
        })
        .collect();

    FeedItem {
        author,
        entry_date: entry.entry_date,
        display_date: dates.format(entry.entry_date),
        score: entry_score(entry),
        max_score: Criterion::COUNT,
        criteria,
        images: entry.images.clone(),
    }
}
