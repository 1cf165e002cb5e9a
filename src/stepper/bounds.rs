//! Clamp-or-wrap bounding policy
//!
//! Wrapping is saturating: a value past one end lands on the opposite end,
//! never `min + (v - max) % width`.

/// How out-of-range values are brought back into `[minimum, maximum]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingPolicy {
    /// Values past an end are pinned to that end
    Clamp,
    /// Values past an end jump to the opposite end
    Wrap,
}

impl BoundingPolicy {
    /// Policy selected by the controller's `wraps` flag
    pub fn from_wraps(wraps: bool) -> Self {
        if wraps { Self::Wrap } else { Self::Clamp }
    }

    /// Apply the policy to `value`
    ///
    /// Callers guarantee `minimum <= maximum`. In-range values are returned unchanged.
    pub fn apply(self, value: f64, minimum: f64, maximum: f64) -> f64 {
        debug_assert!(minimum <= maximum, "bounds inverted: {minimum} > {maximum}");

        if value > maximum {
            match self {
                Self::Clamp => maximum,
                Self::Wrap => minimum,
            }
        } else if value < minimum {
            match self {
                Self::Clamp => minimum,
                Self::Wrap => maximum,
            }
        } else {
            value
        }
    }
}
