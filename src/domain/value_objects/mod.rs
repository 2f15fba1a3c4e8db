use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn next(self) -> Self {
        UserId(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_segment() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId(42));
        assert_eq!("-3".parse::<UserId>().unwrap(), UserId(-3));
    }

    #[test]
    fn rejects_non_numeric_segment() {
        for raw in ["abc", "", "1.5", "12a"] {
            let err = raw.parse::<UserId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidIdentifier(ref s) if s == raw));
        }
    }
}
