//! Interest categories and the topic pools they map to
//!
//! A student's interest decides both which branches they see and which
//! topic table their claims land in. Table names come from this enum only,
//! never from request input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Academic interest picked on the selection page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Linguistics,
    Communication,
    Both,
}

impl Interest {
    pub const ALL: [Interest; 3] = [Self::Linguistics, Self::Communication, Self::Both];

    /// Value stored in `branches.type` and sent by the HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linguistics => "linguistics",
            Self::Communication => "communication",
            Self::Both => "both",
        }
    }

    /// Topic pool claims for this interest are drawn from.
    pub fn pool(&self) -> Pool {
        match self {
            Self::Linguistics => Pool::Linguistics,
            Self::Communication => Pool::Communication,
            Self::Both => Pool::Integrated,
        }
    }

    /// Human readable label for pages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linguistics => "Linguistics",
            Self::Communication => "Communication",
            Self::Both => "Linguistics & Communication",
        }
    }
}

impl FromStr for Interest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ValidationError::Empty { field: "interest" }),
            "linguistics" => Ok(Self::Linguistics),
            "communication" => Ok(Self::Communication),
            "both" => Ok(Self::Both),
            other => Err(ValidationError::invalid_variant("interest", other)),
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three topic tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Pool {
    Linguistics,
    Communication,
    Integrated,
}

impl Pool {
    pub const ALL: [Pool; 3] = [Self::Linguistics, Self::Communication, Self::Integrated];

    /// Table holding this pool's topics.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Linguistics => "linguistics_topics",
            Self::Communication => "communication_topics",
            Self::Integrated => "integrated_topics",
        }
    }

    /// Interest whose topics live in this pool.
    pub fn interest(&self) -> Interest {
        match self {
            Self::Linguistics => Interest::Linguistics,
            Self::Communication => Interest::Communication,
            Self::Integrated => Interest::Both,
        }
    }

    /// Inverse of [`Pool::table`], used when reading tagged union queries.
    pub fn from_table(table: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pool| pool.table() == table)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
