use sqlx::PgPool;
use storage::{
    dto::entry::UpsertEntryRequest, error::Result, models::DailyEntry,
    repository::entry::EntryRepository,
};
use uuid::Uuid;

/// Create or replace the user's entry for the request date
pub async fn upsert_entry(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpsertEntryRequest,
) -> Result<DailyEntry> {
    let repo = EntryRepository::new(pool);
    repo.upsert(user_id, request).await
}
