use std::env::args;

use nagiosstatus::{Bound, StatusAggregator};

// Usage: cargo run --example threshold -- <load>

fn main() {
    let load: f64 = args()
        .nth(1)
        .expect("provide a value")
        .parse()
        .expect("value should be a number");

    let mut status = StatusAggregator::new();

    // Warn above 4, go critical above 8
    status.check_threshold("load", load, 4.0, 8.0);

    // Only a warning bound for this one
    status.check_threshold("load_per_core", load / 4.0, 1.0, Bound::Disabled);

    status.add_perfdata("cores", 4);

    // e.g. "WARNING - warning(load=5.000000) ok(load_per_core=1.250000) | ..."
    status.print_and_exit();
}
