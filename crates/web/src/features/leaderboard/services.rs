use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardView,
    error::Result,
    repository::entry::EntryRepository,
    services::aggregate_leaderboard,
};

/// Fetch every entry and rank users by their summed scores
pub async fn get_leaderboard(pool: &PgPool) -> Result<LeaderboardView> {
    let entries = EntryRepository::new(pool).list_with_users().await?;
    tracing::debug!("Aggregating leaderboard over {} entries", entries.len());

    Ok(aggregate_leaderboard(&entries))
}
