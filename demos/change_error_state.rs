use anyhow::anyhow;

use nagiosstatus::{Runner, State, StatusAggregator};

fn main() {
    // Instead of the default unknown state, we report errors as critical.
    Runner::<anyhow::Error>::new()
        .on_error(|e| (State::Critical, anyhow!("check aborted: {e}")))
        .safe_run(do_check)
        .print_and_exit()
}

fn do_check() -> Result<StatusAggregator, anyhow::Error> {
    let mut status = StatusAggregator::new();
    status.add_ok("service reachable");

    // Do something which returns an error.
    Err(anyhow!("response could not be parsed"))
}
