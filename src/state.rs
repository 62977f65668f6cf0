use std::fmt;
use std::str::FromStr;

/// Represents a service state as reported to nagios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl State {
    /// Returns the process exit code used to signal this state.
    ///
    /// Existing callers depend on critical being reported as 1 and warning as 2, so this
    /// deliberately differs from the usual plugin convention.
    ///
    /// ```rust
    /// # use nagiosstatus::State;
    /// assert_eq!(State::Critical.exit_code(), 1);
    /// assert_eq!(State::Warning.exit_code(), 2);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            State::Ok => 0,
            State::Critical => 1,
            State::Warning => 2,
            State::Unknown => 3,
        }
    }

    /// The label printed at the start of the status line.
    pub fn label(&self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warning => "WARNING",
            State::Critical => "CRITICAL",
            State::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown state label: {0:?}")]
pub struct ParseStateError(String);

impl FromStr for State {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OK" => Ok(State::Ok),
            "WARNING" => Ok(State::Warning),
            "CRITICAL" => Ok(State::Critical),
            "UNKNOWN" => Ok(State::Unknown),
            _ => Err(ParseStateError(s.to_owned())),
        }
    }
}
