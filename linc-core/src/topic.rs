//! Topic identifiers and claim selections

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ValidationError;

/// Identifier of a topic row inside its pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TopicId(i32);

impl TopicId {
    pub fn new(id: i32) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidFormat {
                field: "topics",
                reason: "topic ids must be positive integers",
            });
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl FromStr for TopicId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<i32>().map_err(|_| ValidationError::InvalidFormat {
            field: "topics",
            reason: "topic ids must be positive integers",
        })?;
        Self::new(id)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, de-duplicated set of topics requested in one claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSelection(BTreeSet<TopicId>);

impl TopicSelection {
    /// Parse one or more raw values, each of which may hold a comma
    /// separated list (`"5,7"`). Blank segments are skipped, so trailing
    /// commas are harmless; a selection with no ids at all is rejected.
    pub fn parse<I, S>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = BTreeSet::new();
        for value in values {
            for part in value.as_ref().split(',') {
                if part.trim().is_empty() {
                    continue;
                }
                ids.insert(part.parse::<TopicId>()?);
            }
        }
        Self::from_ids(ids)
    }

    pub fn from_ids(ids: impl IntoIterator<Item = TopicId>) -> Result<Self, ValidationError> {
        let ids: BTreeSet<TopicId> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(ValidationError::Empty { field: "topics" });
        }
        Ok(Self(ids))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.0.contains(&id)
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.0.iter().copied()
    }

    /// Raw ids for binding as a Postgres `int4[]`.
    pub fn to_i32_vec(&self) -> Vec<i32> {
        self.0.iter().map(TopicId::get).collect()
    }
}

impl fmt::Display for TopicSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&ids.join(","))
    }
}
