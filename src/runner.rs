use std::fmt::Display;

use tracing::warn;

use crate::{State, StatusAggregator};

/// Runs a whole check and turns an error into a status line instead of a panic or a bare
/// error message.
///
/// ```rust
/// # use nagiosstatus::{Runner, State, StatusAggregator};
/// let result = Runner::new()
///     .on_error(|e: &String| (State::Critical, e.clone()))
///     .safe_run(|| Err::<StatusAggregator, _>("connection refused".to_owned()));
///
/// assert_eq!(
///     result.into_aggregator().render(),
///     (1, "CRITICAL - critical(connection refused)".to_owned())
/// );
/// ```
pub struct Runner<E> {
    error_state: State,
    on_error: Option<Box<dyn FnOnce(&E) -> (State, E)>>,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self {
            error_state: State::Unknown,
            on_error: None,
        }
    }

    /// The state failures are reported with when no [Self::on_error] handler is set.
    /// Defaults to [State::Unknown].
    pub fn error_state(mut self, state: State) -> Self {
        self.error_state = state;
        self
    }

    /// Picks the state (and possibly a replacement error) reported when the check fails.
    pub fn on_error(mut self, f: impl FnOnce(&E) -> (State, E) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn safe_run(self, f: impl FnOnce() -> Result<StatusAggregator, E>) -> RunnerResult<E> {
        match f() {
            Ok(status) => RunnerResult::Ok(status),
            Err(err) => {
                let (state, err) = match self.on_error {
                    Some(f) => f(&err),
                    None => (self.error_state, err),
                };
                warn!(%state, error = %err, "check failed");

                RunnerResult::Err(state, err)
            }
        }
    }
}

impl<E: Display> Default for Runner<E> {
    fn default() -> Self {
        Self::new()
    }
}

pub enum RunnerResult<E> {
    Ok(StatusAggregator),
    Err(State, E),
}

impl<E: Display> RunnerResult<E> {
    /// The aggregator to report. A failed check yields a fresh aggregator holding only the
    /// error message under the chosen state.
    pub fn into_aggregator(self) -> StatusAggregator {
        match self {
            RunnerResult::Ok(status) => status,
            RunnerResult::Err(state, err) => {
                let mut status = StatusAggregator::new();
                status.add(state, err.to_string());
                status
            }
        }
    }

    pub fn print_and_exit(self) -> ! {
        self.into_aggregator().print_and_exit()
    }
}
