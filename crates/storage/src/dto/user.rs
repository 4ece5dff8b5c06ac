use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Public user profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub goal: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(max = 200, message = "Goal must be at most 200 characters"))]
    pub goal: Option<String>,
}

/// Request payload for updating the current user's profile.
///
/// `photo_url` is only written when present; omitting it keeps the stored
/// photo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please enter a name (at most 100 characters)"
    ))]
    pub name: String,

    #[validate(length(max = 200, message = "Goal must be at most 200 characters"))]
    pub goal: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub photo_url: Option<String>,
}

impl CreateUserRequest {
    /// Trims the name and turns a blank goal into no goal.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            goal: normalize_goal(self.goal),
        }
    }
}

impl UpdateUserRequest {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            goal: normalize_goal(self.goal),
            photo_url: self.photo_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

fn normalize_goal(goal: Option<String>) -> Option<String> {
    goal.map(|goal| goal.trim().to_string())
        .filter(|goal| !goal.is_empty())
}

impl From<crate::models::User> for UserResponse {
    fn from(user: crate::models::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            goal: user.goal,
            photo_url: user.photo_url,
            created_at: user.created_at,
        }
    }
}
