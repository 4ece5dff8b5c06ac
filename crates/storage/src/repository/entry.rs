use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::entry::UpsertEntryRequest;
use crate::error::{Result, StorageError};
use crate::models::{CriteriaFlags, DailyEntry, EntryUser};

const ENTRY_COLUMNS: &str = r#"
    e.user_id, e.entry_date,
    e.workout, e.steps, e.sleep, e.protein,
    e.no_sugar_fried, e.no_alcohol_smoking, e.water,
    e.images, e.created_at,
    u.id AS author_id, u.name AS author_name, u.photo_url AS author_photo_url
"#;

#[derive(FromRow)]
struct EntryRow {
    user_id: Uuid,
    entry_date: NaiveDate,
    workout: bool,
    steps: bool,
    sleep: bool,
    protein: bool,
    no_sugar_fried: bool,
    no_alcohol_smoking: bool,
    water: bool,
    images: Option<Vec<String>>,
    created_at: NaiveDateTime,
    author_id: Option<Uuid>,
    author_name: Option<String>,
    author_photo_url: Option<String>,
}

impl From<EntryRow> for DailyEntry {
    fn from(row: EntryRow) -> Self {
        Self {
            user_id: Some(row.user_id),
            entry_date: row.entry_date,
            flags: CriteriaFlags {
                workout: row.workout,
                steps: row.steps,
                sleep: row.sleep,
                protein: row.protein,
                no_sugar_fried: row.no_sugar_fried,
                no_alcohol_smoking: row.no_alcohol_smoking,
                water: row.water,
            },
            images: row.images,
            created_at: Some(row.created_at),
            user: row.author_id.map(|id| EntryUser {
                id,
                name: row.author_name,
                photo_url: row.author_photo_url,
            }),
        }
    }
}

pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All entries with their author, newest date first, then newest
    /// submission first.
    pub async fn list_with_users(&self) -> Result<Vec<DailyEntry>> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM daily_entries e
            LEFT JOIN users u ON u.id = e.user_id
            ORDER BY e.entry_date DESC, e.created_at DESC
            "#
        );

        let rows: Vec<EntryRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(DailyEntry::from).collect())
    }

    /// Creates the user's entry for the date, or replaces the flags of the
    /// existing one. Images are replaced only when the request carries some.
    pub async fn upsert(&self, user_id: Uuid, req: &UpsertEntryRequest) -> Result<DailyEntry> {
        let images = (!req.images.is_empty()).then(|| req.images.clone());

        let sql = format!(
            r#"
            WITH upserted AS (
                INSERT INTO daily_entries (
                    user_id, entry_date,
                    workout, steps, sleep, protein,
                    no_sugar_fried, no_alcohol_smoking, water,
                    images
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (user_id, entry_date) DO UPDATE SET
                    workout = EXCLUDED.workout,
                    steps = EXCLUDED.steps,
                    sleep = EXCLUDED.sleep,
                    protein = EXCLUDED.protein,
                    no_sugar_fried = EXCLUDED.no_sugar_fried,
                    no_alcohol_smoking = EXCLUDED.no_alcohol_smoking,
                    water = EXCLUDED.water,
                    images = COALESCE(EXCLUDED.images, daily_entries.images)
                RETURNING *
            )
            SELECT {ENTRY_COLUMNS}
            FROM upserted e
            LEFT JOIN users u ON u.id = e.user_id
            "#
        );

        let flags = &req.flags;
        let row: EntryRow = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(req.entry_date)
            .bind(flags.workout)
            .bind(flags.steps)
            .bind(flags.sleep)
            .bind(flags.protein)
            .bind(flags.no_sugar_fried)
            .bind(flags.no_alcohol_smoking)
            .bind(flags.water)
            .bind(images)
            .fetch_one(self.pool)
            .await
            .map_err(|e| match StorageError::from(e) {
                e if e.is_foreign_key_violation() => {
                    StorageError::ConstraintViolation("User does not exist".to_string())
                }
                e => e,
            })?;

        Ok(row.into())
    }
}
