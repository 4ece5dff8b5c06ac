use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateUrl};

use crate::models::{CriteriaFlags, Criterion};

/// Request payload for creating or replacing the caller's entry for a date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertEntryRequest {
    pub entry_date: NaiveDate,

    #[serde(flatten)]
    pub flags: CriteriaFlags,

    /// URLs of images already uploaded to storage. When empty, images stored
    /// by an earlier submission for the same date are kept.
    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 images per entry"))]
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorePreviewResponse {
    pub score: u8,
    pub max_score: u8,
}

impl ScorePreviewResponse {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            max_score: Criterion::COUNT,
        }
    }
}

fn validate_image_urls(images: &[String]) -> Result<(), validator::ValidationError> {
    if images.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_image_url"))
    }
}
