use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Avatar, Criterion};

/// Feed projection result. `Empty` is its own state so clients can show a
/// placeholder instead of an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum FeedView {
    Empty,
    Entries(Vec<FeedItem>),
}

impl FeedView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn items(&self) -> &[FeedItem] {
        match self {
            Self::Empty => &[],
            Self::Entries(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedItem {
    pub author: FeedAuthor,
    pub entry_date: NaiveDate,
    pub display_date: String,
    pub score: u8,
    pub max_score: u8,
    pub criteria: Vec<CriterionBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedAuthor {
    pub user_id: Option<Uuid>,
    pub display_name: String,
    pub avatar: Avatar,
}

/// One criterion of an entry, marked met or missed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CriterionBadge {
    pub criterion: Criterion,
    pub label: String,
    pub met: bool,
}
