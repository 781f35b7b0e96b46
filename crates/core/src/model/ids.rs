use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Challenge within its catalog.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Creates a new `ChallengeId` from any string-like value.
    ///
    /// No validation happens here; use `str::parse` to reject blank ids.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChallengeId({:?})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ChallengeId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                kind: "ChallengeId".to_string(),
            });
        }
        Ok(Self::new(trimmed))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_id_display() {
        let id = ChallengeId::new("c42");
        assert_eq!(id.to_string(), "c42");
    }

    #[test]
    fn test_challenge_id_from_str_trims() {
        let id: ChallengeId = "  c7 ".parse().unwrap();
        assert_eq!(id, ChallengeId::new("c7"));
    }

    #[test]
    fn test_challenge_id_from_str_blank() {
        let result = "   ".parse::<ChallengeId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_is_tagged() {
        assert_eq!(format!("{:?}", ChallengeId::new("c1")), "ChallengeId(\"c1\")");
    }
}
