use sqlx::PgPool;
use storage::{
    dto::feed::FeedView,
    error::Result,
    repository::entry::EntryRepository,
    services::{DateFormatter, project_feed},
};

/// Fetch every entry and project the feed
pub async fn get_feed(pool: &PgPool, dates: &DateFormatter) -> Result<FeedView> {
    let entries = EntryRepository::new(pool).list_with_users().await?;
    tracing::debug!("Projecting feed over {} entries", entries.len());

    Ok(project_feed(&entries, dates))
}
