use std::fmt;

/// Quantifier policy of a verification: how the expected count is read.
///
/// | Policy | Passes when the pattern appears |
/// |--------|---------------------------------|
/// | [`Exact`](Self::Exact) | exactly `expected_count` times |
/// | [`AtLeast`](Self::AtLeast) | `expected_count` times or more |
///
/// Each verification attempt carries exactly one policy. Reports render it
/// as `"exactly "` or `"at least "` in front of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerificationType {
    /// The pattern must appear exactly `expected_count` times.
    #[default]
    Exact,

    /// The pattern must appear at least `expected_count` times.
    AtLeast,
}

impl VerificationType {
    /// Returns `true` if this is the [`Exact`](Self::Exact) policy.
    pub fn is_exact(&self) -> bool {
        matches!(self, VerificationType::Exact)
    }

    /// Returns `true` if this is the [`AtLeast`](Self::AtLeast) policy.
    pub fn is_at_least(&self) -> bool {
        matches!(self, VerificationType::AtLeast)
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationType::Exact => write!(f, "Exact"),
            VerificationType::AtLeast => write!(f, "AtLeast"),
        }
    }
}
