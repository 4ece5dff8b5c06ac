use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A daily wellness condition tracked per entry.
///
/// The set is closed: every criterion has a matching boolean column on
/// `daily_entries` and a field on [`CriteriaFlags`](super::CriteriaFlags),
/// and the compiler keeps the three in sync through exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Workout,
    Steps,
    Sleep,
    Protein,
    NoSugarFried,
    NoAlcoholSmoking,
    Water,
}

impl Criterion {
    /// Registry order. Display order for badges and forms.
    pub const ALL: [Criterion; 7] = [
        Self::Workout,
        Self::Steps,
        Self::Sleep,
        Self::Protein,
        Self::NoSugarFried,
        Self::NoAlcoholSmoking,
        Self::Water,
    ];

    pub const COUNT: u8 = Self::ALL.len() as u8;

    /// Stable identifier, also the column name in `daily_entries`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Steps => "steps",
            Self::Sleep => "sleep",
            Self::Protein => "protein",
            Self::NoSugarFried => "no_sugar_fried",
            Self::NoAlcoholSmoking => "no_alcohol_smoking",
            Self::Water => "water",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Workout => "Workout (30+ mins)",
            Self::Steps => "10,000 steps",
            Self::Sleep => "7+ hours sleep",
            Self::Protein => "Protein >= 1g/kg",
            Self::NoSugarFried => "No refined sugar or fried food",
            Self::NoAlcoholSmoking => "No alcohol or smoking",
            Self::Water => "Water >= 2.5L",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|criterion| criterion.key() == key)
    }
}
