/// Install the global `tracing` subscriber.
///
/// Output goes to stderr because stdout carries the generated source. The
/// level is read from `RUST_LOG` and defaults to `warn`, so a normal run is
/// silent. Calling this more than once is harmless: later calls are ignored.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_no_panic() {
        init();
        init();
    }
}
