use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a regulatory docket, as assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocketId(i64);

impl DocketId {
    pub const fn new(id: i64) -> Self {
        DocketId(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DocketId {
    fn from(id: i64) -> Self {
        DocketId(id)
    }
}

impl FromStr for DocketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(DocketId)
    }
}
