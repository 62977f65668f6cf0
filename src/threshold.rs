use std::str::FromStr;

use crate::State;

/// One side of a threshold check. A value only triggers a bound when it is strictly greater
/// than the limit; a disabled bound never triggers.
///
/// Converting a NaN into a `Bound` yields [Bound::Disabled], so callers used to passing NaN
/// as "no limit" get the same result:
///
/// ```rust
/// # use nagiosstatus::Bound;
/// assert_eq!(Bound::from(f64::NAN), Bound::Disabled);
/// assert_eq!(Bound::from(None::<f64>), Bound::Disabled);
/// assert_eq!(Bound::from(80.0), Bound::Limit(80.0));
/// assert!(Bound::Limit(80.0).exceeded_by(80.5));
/// assert!(!Bound::Disabled.exceeded_by(f64::INFINITY));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Bound {
    #[default]
    Disabled,
    Limit(f64),
}

impl Bound {
    /// Whether `value` triggers this bound.
    pub fn exceeded_by(&self, value: f64) -> bool {
        match self {
            Bound::Disabled => false,
            // NaN on either side compares false
            Bound::Limit(limit) => value > *limit,
        }
    }

    /// Whether this bound can never trigger.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Bound::Disabled)
    }
}

impl From<f64> for Bound {
    fn from(limit: f64) -> Self {
        if limit.is_nan() {
            Bound::Disabled
        } else {
            Bound::Limit(limit)
        }
    }
}

impl From<Option<f64>> for Bound {
    fn from(limit: Option<f64>) -> Self {
        limit.map(Bound::from).unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid threshold {input:?}: expected a number, \"nan\", \"none\" or an empty string")]
pub struct ParseBoundError {
    input: String,
}

impl FromStr for Bound {
    type Err = ParseBoundError;

    /// Parses a bound as given on a command line. An empty string, `nan` and `none` disable
    /// the bound.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("none")
        {
            return Ok(Bound::Disabled);
        }

        trimmed
            .parse::<f64>()
            .map(Bound::from)
            .map_err(|_| ParseBoundError {
                input: s.to_owned(),
            })
    }
}

/// Classifies `value` against the given bounds. The critical bound is checked first, then the
/// warning bound; anything else is ok.
///
/// ```rust
/// # use nagiosstatus::{classify, Bound, State};
/// assert_eq!(classify(5.0, 4.0.into(), 4.0.into()), State::Critical);
/// assert_eq!(classify(5.0, 4.0.into(), Bound::Disabled), State::Warning);
/// assert_eq!(classify(5.0, 5.0.into(), 5.0.into()), State::Ok);
/// ```
pub fn classify(value: f64, warning: Bound, critical: Bound) -> State {
    if critical.exceeded_by(value) {
        State::Critical
    } else if warning.exceeded_by(value) {
        State::Warning
    } else {
        State::Ok
    }
}
