//! Basic example demonstrating call throttling.
//!
//! Fires a burst of calls at a throttler, waits out the cooldown, then
//! fires again, printing which calls actually ran.

use std::thread;
use std::time::Duration;
use throttlekit::Throttler;
use tracing::info;

fn main() {
    // Trace-level output shows the throttler's accept/suppress decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,throttlekit=trace")),
        )
        .init();

    let throttler = Throttler::new(Duration::from_secs(2));
    let mut sent = 0;

    println!("=== Throttler Example ===");
    println!("Cooldown: 2s. Firing 5 rapid calls:\n");

    for i in 1..=5 {
        let executed = throttler.execute(|| {
            sent += 1;
            info!(call = i, "request sent");
        });
        println!("call {i}: {}", if executed { "executed" } else { "suppressed" });
    }

    println!("\nWaiting out the cooldown...\n");
    thread::sleep(Duration::from_millis(2_100));

    let executed = throttler.execute(|| {
        sent += 1;
        info!(call = 6, "request sent");
    });
    println!("call 6: {}", if executed { "executed" } else { "suppressed" });

    println!("\nTotal requests actually sent: {sent} (out of 6 calls)");
}
