use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for a given `-v` count
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "shipit=info,warn",
        2 => "shipit=debug,info",
        _ => "trace",
    }
}

/// Initialize tracing; logs always go to stderr so stdout stays clean for
/// tool output and NDJSON events. `RUST_LOG` overrides the `-v` count.
pub fn init_tracing(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_directive(verbose).into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 3),
        )
        .init();
}
