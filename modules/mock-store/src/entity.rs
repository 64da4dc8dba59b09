use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last-mutation instants of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Both instants set to `at`.
    #[must_use]
    pub const fn at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
        }
    }

    /// Marks a mutation at `now`; `updated_at` never moves backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}

/// A record stored in an [`InMemoryEntityStore`](crate::InMemoryEntityStore).
///
/// `Draft` is the payload accepted on creation (everything except id and
/// timestamps); `Patch` is a partial update where absent fields keep their
/// current value.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + fmt::Display + Send + Sync + 'static;
    type Draft;
    type Patch;

    fn id(&self) -> &Self::Id;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;

    fn from_draft(id: Self::Id, timestamps: Timestamps, draft: Self::Draft) -> Self;

    /// Merges `patch` into `self`. Must not touch the id or the timestamps.
    fn apply_patch(&mut self, patch: Self::Patch);
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn touch_advances_updated_at_only() {
        let start = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        let mut ts = Timestamps::at(start);

        ts.touch(start + TimeDelta::seconds(5));

        assert_eq!(ts.created_at, start);
        assert_eq!(ts.updated_at, start + TimeDelta::seconds(5));
    }

    #[test]
    fn touch_never_goes_backwards() {
        let start = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        let mut ts = Timestamps::at(start);

        ts.touch(start - TimeDelta::hours(1));

        assert_eq!(ts.updated_at, start);
    }

    #[test]
    fn serializes_camel_case() {
        let start = DateTime::from_timestamp(0, 0).unwrap();
        let json = serde_json::to_value(Timestamps::at(start)).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "1970-01-01T00:00:00Z");
    }
}
