use std::env::args;

use nagiosstatus::StatusAggregator;

// Usage: cargo run --example percentage -- <used> <total>

fn main() {
    let mut numbers = args().skip(1).map(|a| a.parse::<f64>().expect("arguments should be numbers"));
    let used = numbers.next().expect("provide the used amount");
    let total = numbers.next().expect("provide the total amount");

    let mut status = StatusAggregator::new().with_show_perfdata(false);
    status.check_percentage_threshold("disk", used, total, 80.0, 90.0);

    // e.g. "OK - ok(disk=42.00%)"
    status.print_and_exit();
}
