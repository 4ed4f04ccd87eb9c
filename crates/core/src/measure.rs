use core::cmp::Ordering;
use core::fmt;

/// A single component of a progress measure: either a finite credit level
/// below `CUTOFF`, or the sentinel `Top` standing for "no finite credit
/// suffices".
///
/// Represented as a tagged variant rather than "any integer >= CUTOFF", so
/// that absorbing ⊤-arithmetic (`Top - k == Top`) is expressed directly in
/// the type instead of re-derived at every call site.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Measure {
    Finite(u64),
    Top,
}

impl Measure {
    /// The initial measure for a non-sink vertex.
    pub fn zero() -> Self {
        Measure::Finite(0)
    }

    /// Returns true iff this measure is `Top`.
    pub fn is_top(&self) -> bool {
        matches!(self, Measure::Top)
    }

    /// Computes `clamp(self - effect)`: `Top` is absorbing, and any result
    /// that would reach or exceed `cutoff` collapses to `Top`.
    pub fn lift_edge(&self, effect: i64, cutoff: u64) -> Measure {
        match self {
            Measure::Top => Measure::Top,
            Measure::Finite(value) => {
                let lifted = *value as i64 - effect;
                if lifted >= cutoff as i64 {
                    Measure::Top
                } else {
                    Measure::Finite(lifted.max(0) as u64)
                }
            }
        }
    }

    /// Returns the finite value of this measure, or `-1` if it is `Top`,
    /// matching `win(v)`'s definition.
    pub fn to_win(self) -> i64 {
        match self {
            Measure::Top => -1,
            Measure::Finite(value) => value as i64,
        }
    }
}

impl PartialOrd for Measure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Measure {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Measure::Top, Measure::Top) => Ordering::Equal,
            (Measure::Top, Measure::Finite(_)) => Ordering::Greater,
            (Measure::Finite(_), Measure::Top) => Ordering::Less,
            (Measure::Finite(a), Measure::Finite(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Top => write!(f, "top"),
            Measure::Finite(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_is_strictly_greatest() {
        assert!(Measure::Top > Measure::Finite(u64::MAX));
        assert_eq!(Measure::Top, Measure::Top);
    }

    #[test]
    fn lift_edge_is_absorbing_on_top() {
        assert_eq!(Measure::Top.lift_edge(1000, 5), Measure::Top);
        assert_eq!(Measure::Top.lift_edge(-1000, 5), Measure::Top);
    }

    #[test]
    fn lift_edge_clamps_negative_results_to_zero() {
        assert_eq!(Measure::Finite(0).lift_edge(5, 10), Measure::Finite(0));
    }

    #[test]
    fn lift_edge_collapses_to_top_at_cutoff() {
        assert_eq!(Measure::Finite(8).lift_edge(-2, 10), Measure::Top);
        assert_eq!(Measure::Finite(7).lift_edge(-2, 10), Measure::Finite(9));
    }
}
