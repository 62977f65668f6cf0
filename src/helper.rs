use std::fmt::Display;

use crate::{Runner, RunnerResult, State, StatusAggregator};

/// Runs the given closure and reports any error under `error_state`.
pub fn safe_run<E: Display>(
    f: impl FnOnce() -> Result<StatusAggregator, E>,
    error_state: State,
) -> RunnerResult<E> {
    Runner::new().error_state(error_state).safe_run(f)
}
