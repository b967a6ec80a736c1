//! Severity classification for audit findings.
//!
//! Advisory severities arrive as free-text labels from the external audit
//! tool. `Severity` keeps the known vocabulary as proper variants and carries
//! anything else through as `Other`, so an unrecognized label is still
//! displayed in reports instead of being dropped.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of an audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Moderate,
    Low,
    Info,
    /// A label outside the known vocabulary, stored lowercased.
    Other(String),
}

impl Severity {
    /// Classify a free-text severity label, case-insensitively.
    ///
    /// Never fails: unrecognized labels become [`Severity::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "moderate" => Self::Moderate,
            "low" => Self::Low,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }

    /// Ordinal rank used as a sort key; lower is more severe.
    ///
    /// `critical` ranks 1, `high` ranks 2, everything else ranks 3. Ties are
    /// left to the (stable) sort, preserving encounter order.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            _ => 3,
        }
    }

    /// The lowercase label for this severity.
    pub fn label(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Info => "info",
            Self::Other(label) => label,
        }
    }

    /// Capitalized form used for table headers (e.g. "Moderate").
    pub fn heading(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label.trim().is_empty() {
            return Err(de::Error::custom("empty severity label"));
        }
        Ok(Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_mapping() {
        assert_eq!(Severity::Critical.rank(), 1);
        assert_eq!(Severity::High.rank(), 2);
        assert_eq!(Severity::Moderate.rank(), 3);
        assert_eq!(Severity::Low.rank(), 3);
        assert_eq!(Severity::Info.rank(), 3);
        assert_eq!(Severity::Other("nonsense".to_string()).rank(), 3);
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(Severity::from_label("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::from_label("High"), Severity::High);
        assert_eq!(Severity::from_label(" moderate "), Severity::Moderate);
    }

    #[test]
    fn test_unknown_label_preserved() {
        let severity = Severity::from_label("Urgent");
        assert_eq!(severity, Severity::Other("urgent".to_string()));
        assert_eq!(severity.rank(), 3);
        assert_eq!(severity.label(), "urgent");
    }

    #[test]
    fn test_heading() {
        assert_eq!(Severity::Moderate.heading(), "Moderate");
        assert_eq!(Severity::Other("low-ish".to_string()).heading(), "Low-ish");
    }

    #[test]
    fn test_serde_roundtrip() {
        let severity = Severity::High;
        let json = serde_json::to_string(&severity).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, severity);
    }
}
