use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conventional values of the envelope `status` field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Fail,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Ok, Status::Fail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Fail => "fail",
        }
    }

    /// Constant-style key, e.g. `OK`.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Fail => "FAIL",
        }
    }

    /// `(key, value)` pairs in declaration order.
    pub fn allowed_values() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.key(), s.as_str())).collect()
    }

    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(Status::key).collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}
