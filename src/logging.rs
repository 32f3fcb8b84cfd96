/// Initialize a `tracing_subscriber` reporting to stderr.
///
/// Only `error!`, `warn!` and `info!` events are reported. Diagnostics
/// go to the error stream; the program writes nothing to stdout.
pub fn initialise_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
