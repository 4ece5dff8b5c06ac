use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Criterion;

/// The seven daily criteria of an entry.
///
/// Deserialization never fails on a flag: absent, `null` and malformed values
/// read as `false`, numbers count when non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CriteriaFlags {
    #[serde(deserialize_with = "truthy")]
    pub workout: bool,
    #[serde(deserialize_with = "truthy")]
    pub steps: bool,
    #[serde(deserialize_with = "truthy")]
    pub sleep: bool,
    #[serde(deserialize_with = "truthy")]
    pub protein: bool,
    #[serde(deserialize_with = "truthy")]
    pub no_sugar_fried: bool,
    #[serde(deserialize_with = "truthy")]
    pub no_alcohol_smoking: bool,
    #[serde(deserialize_with = "truthy")]
    pub water: bool,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TruthyVisitor)
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a criterion flag")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
        Ok(v != 0.0 && !v.is_nan())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<bool, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(false)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<bool, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(false)
    }
}

impl CriteriaFlags {
    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Workout => self.workout,
            Criterion::Steps => self.steps,
            Criterion::Sleep => self.sleep,
            Criterion::Protein => self.protein,
            Criterion::NoSugarFried => self.no_sugar_fried,
            Criterion::NoAlcoholSmoking => self.no_alcohol_smoking,
            Criterion::Water => self.water,
        }
    }

    pub fn set(&mut self, criterion: Criterion, met: bool) {
        let field = match criterion {
            Criterion::Workout => &mut self.workout,
            Criterion::Steps => &mut self.steps,
            Criterion::Sleep => &mut self.sleep,
            Criterion::Protein => &mut self.protein,
            Criterion::NoSugarFried => &mut self.no_sugar_fried,
            Criterion::NoAlcoholSmoking => &mut self.no_alcohol_smoking,
            Criterion::Water => &mut self.water,
        };
        *field = met;
    }

    /// Builds flags from the criteria that were checked, e.g. the `on`
    /// fields of a submitted form.
    pub fn from_met<I>(met: I) -> Self
    where
        I: IntoIterator<Item = Criterion>,
    {
        let mut flags = Self::default();
        for criterion in met {
            flags.set(criterion, true);
        }
        flags
    }
}

/// User summary joined onto an entry for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntryUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

/// One user's self-report for one calendar date.
///
/// `(user_id, entry_date)` is unique at the persistence layer; nothing here
/// deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyEntry {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub entry_date: NaiveDate,
    #[serde(flatten)]
    pub flags: CriteriaFlags,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, alias = "users")]
    pub user: Option<EntryUser>,
}
