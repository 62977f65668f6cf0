use anyhow::anyhow;

use nagiosstatus::{Runner, StatusAggregator};

fn main() {
    // Prints "UNKNOWN - unknown(something really bad happened)" and exits with 3
    Runner::new().safe_run(do_check).print_and_exit()
}

// This example uses anyhow
fn do_check() -> Result<StatusAggregator, anyhow::Error> {
    // Do something which returns an error.
    Err(anyhow!("something really bad happened"))
}
