use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Criterion;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CriterionResponse {
    pub key: String,
    pub label: String,
}

impl From<Criterion> for CriterionResponse {
    fn from(criterion: Criterion) -> Self {
        Self {
            key: criterion.key().to_string(),
            label: criterion.label().to_string(),
        }
    }
}

/// Registry in display order.
pub fn registry() -> Vec<CriterionResponse> {
    Criterion::ALL.into_iter().map(CriterionResponse::from).collect()
}
