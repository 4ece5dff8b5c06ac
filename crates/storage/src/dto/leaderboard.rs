use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Avatar;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum LeaderboardView {
    Empty,
    Ranked(Vec<LeaderboardRow>),
}

impl LeaderboardView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[LeaderboardRow] {
        match self {
            Self::Empty => &[],
            Self::Ranked(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub avatar: Avatar,
    pub total_score: u32,
}
